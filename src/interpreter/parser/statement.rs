use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr, Program, Statement},
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{parse_atom, parse_formula},
            utils::TokenStream,
        },
    },
};

/// Parses a single statement.
///
/// A statement is either
/// - an assignment, `atom "=" formula`, recognised by a two-token lookahead;
///   the target is always a bare atom, never a group or a chain, or
/// - a plain formula.
///
/// # Errors
/// Returns a [`ParseError`] if the assigned value or the formula is malformed.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    let starts_with_atom = matches!(tokens.peek_kind_nth(0),
                                    Some(TokenKind::Number | TokenKind::Variable));
    if starts_with_atom && tokens.peek_kind_nth(1) == Some(TokenKind::Assign) {
        let target = parse_atom(tokens)?;
        let assign = tokens.require(TokenKind::Assign)?;
        let value = parse_formula(tokens)?;
        return Ok(Statement::new(Expr::BinaryOp { op:       BinaryOperator::Assign,
                                                  left:     Box::new(target),
                                                  right:    Box::new(value),
                                                  position: assign.position, }));
    }

    parse_formula(tokens).map(Statement::new)
}

/// Parses every statement on a line.
///
/// Parsing repeats until the tokens are exhausted, so `x = 1 y = 2` yields two
/// statements. `end` is the length of the source line and is used for errors
/// raised at end of input.
///
/// # Errors
/// Returns [`ParseError::EmptyInput`] when there are no tokens, or the first
/// error raised by [`parse_statement`]. No partial program is returned.
///
/// ## Example
/// ```
/// use tally::interpreter::{lexer::tokenize, parser::parse_program};
///
/// let source = "x = 1 x + 1";
/// let tokens = tokenize(source).unwrap();
/// let program = parse_program(&tokens, source.len()).unwrap();
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token], end: usize) -> ParseResult<Program> {
    let mut stream = TokenStream::new(tokens, end);
    if stream.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut program = Program::default();
    while !stream.is_empty() {
        let statement = parse_statement(&mut stream)?;
        trace!(statement = %statement.expr, "parsed statement");
        program.statements.push(statement);
    }
    Ok(program)
}
