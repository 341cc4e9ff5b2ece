use std::{iter::Peekable, slice::Iter};

use crate::{
    error::{ParseError, ParseResult},
    interpreter::lexer::{Token, TokenKind},
};

/// How many parenthesized groups may be open at once.
///
/// Each open group costs the parser and the evaluator a stack frame.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A peekable cursor over the tokens of one line.
///
/// Besides the tokens it remembers where the line ends, so errors raised at
/// end of input can still point at a source offset, and how many
/// parenthesized groups are currently open.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: Peekable<Iter<'a, Token>>,
    end:    usize,
    depth:  usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `tokens`; `end` is the length of the source line.
    #[must_use]
    pub fn new(tokens: &'a [Token], end: usize) -> Self {
        Self { tokens: tokens.iter().peekable(),
               end,
               depth: 0 }
    }

    #[must_use]
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    pub fn advance(&mut self) -> Option<&'a Token> {
        self.tokens.next()
    }

    /// Kind of the token at offset `n` from the cursor, without consuming.
    #[must_use]
    pub fn peek_kind_nth(&self, n: usize) -> Option<TokenKind> {
        self.tokens.clone().nth(n).map(|t| t.kind)
    }

    pub fn is_empty(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    /// Offset of the next token, or the end of the line.
    pub fn position(&mut self) -> usize {
        self.tokens.peek().map_or(self.end, |t| t.position)
    }

    /// Consumes the next token if its kind satisfies `accept`.
    pub fn next_if(&mut self, accept: impl Fn(TokenKind) -> bool) -> Option<&'a Token> {
        self.tokens.next_if(|t| accept(t.kind))
    }

    /// Consumes the next token if it has exactly `kind`.
    pub fn next_if_kind(&mut self, kind: TokenKind) -> Option<&'a Token> {
        self.next_if(|k| k == kind)
    }

    /// Consumes a token of `kind` or fails.
    ///
    /// # Errors
    /// Returns [`ParseError::Expected`] pointing at the offending token, or at
    /// the end of the line when nothing is left.
    pub fn require(&mut self, kind: TokenKind) -> ParseResult<&'a Token> {
        match self.next_if_kind(kind) {
            Some(token) => Ok(token),
            None => Err(ParseError::Expected { expected: kind,
                                               position: self.position(), }),
        }
    }

    /// Records that a group opened at `position`.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] once more than
    /// [`MAX_NESTING_DEPTH`] groups are open.
    pub fn open_group(&mut self, position: usize) -> ParseResult<()> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    position });
        }
        self.depth += 1;
        Ok(())
    }

    pub fn close_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
