use logos::Logos;
use tracing::trace;

use crate::error::{LexError, LexResult};

/// The kind of a lexical token.
///
/// Variants are declared in matching priority order. The number pattern wins
/// on digits and `.`, so identifiers can only start with a letter or `_`.
/// `Space` is recognised but never emitted by [`Tokenizer`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literals such as `42`, `3.14` or `.5`.
    ///
    /// The pattern is deliberately permissive: `1.2.3` is a single token.
    #[regex(r"[0-9.]+")]
    Number,
    /// Identifiers such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,
    /// Horizontal and vertical whitespace.
    #[regex(r"[ \t\r\n\x0B\x0C]+")]
    Space,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multi,
    /// `/`
    #[token("/")]
    Division,
    /// `%`
    #[token("%")]
    Remainder,
    /// `(`
    #[token("(")]
    LPar,
    /// `)`
    #[token(")")]
    RPar,
}

impl TokenKind {
    /// Returns the stable tag of this kind, as used in error messages.
    ///
    /// ## Example
    /// ```
    /// use tally::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::RPar.name(), "rpar");
    /// assert_eq!(TokenKind::Variable.name(), "variable");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Variable => "variable",
            Self::Space => "space",
            Self::Assign => "assign",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Multi => "multi",
            Self::Division => "division",
            Self::Remainder => "remainder",
            Self::LPar => "lpar",
            Self::RPar => "rpar",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind:     TokenKind,
    /// The exact matched text.
    pub text:     String,
    /// Byte offset of the first character in the source line.
    pub position: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }
}

/// Converts source lines into token sequences.
///
/// The tokenizer keeps its token buffer between calls so it can be reused by
/// a long-lived interpreter. Every call to [`Tokenizer::tokenize`] clears the
/// previous line's tokens before scanning.
#[derive(Debug, Default)]
pub struct Tokenizer {
    tokens: Vec<Token>,
}

impl Tokenizer {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Discards the tokens left over from the previous call.
    pub fn reset(&mut self) {
        self.tokens.clear();
    }

    /// Tokenizes one source line.
    ///
    /// Whitespace is consumed and dropped. Scanning stops at the first
    /// character that no token kind accepts.
    ///
    /// # Errors
    /// Returns [`LexError::UnexpectedCharacter`] carrying the offending
    /// character and its offset.
    ///
    /// ## Example
    /// ```
    /// use tally::interpreter::lexer::{TokenKind, Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new();
    /// let kinds: Vec<_> = tokenizer.tokenize("x = 1.5")
    ///                              .unwrap()
    ///                              .iter()
    ///                              .map(|t| t.kind)
    ///                              .collect();
    /// assert_eq!(kinds, [TokenKind::Variable, TokenKind::Assign, TokenKind::Number]);
    /// ```
    pub fn tokenize(&mut self, source: &str) -> LexResult<&[Token]> {
        self.reset();

        let mut lexer = TokenKind::lexer(source);
        while let Some(kind) = lexer.next() {
            let span = lexer.span();
            match kind {
                Ok(TokenKind::Space) => {},
                Ok(kind) => {
                    trace!(%kind, text = lexer.slice(), position = span.start, "token");
                    self.tokens.push(Token::new(kind, lexer.slice(), span.start));
                },
                Err(()) => {
                    let character = source[span.start..].chars().next().unwrap_or_default();
                    return Err(LexError::UnexpectedCharacter { character,
                                                               position: span.start });
                },
            }
        }

        Ok(&self.tokens)
    }
}

/// Tokenizes `source` with a throwaway [`Tokenizer`].
///
/// # Errors
/// See [`Tokenizer::tokenize`].
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Tokenizer::new().tokenize(source).map(<[Token]>::to_vec)
}
