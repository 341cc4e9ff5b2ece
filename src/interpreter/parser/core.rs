use crate::{
    ast::{ArithmeticOperator, Expr},
    error::{ParseError, ParseResult},
    interpreter::{lexer::TokenKind, parser::utils::TokenStream},
};

/// Parses an atom: a number literal or a bare identifier.
///
/// Grammar: `atom := number | variable`
///
/// # Errors
/// Returns [`ParseError::ExpectedAtom`] if the next token is anything else or
/// the line has ended.
pub fn parse_atom(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if let Some(token) = tokens.next_if_kind(TokenKind::Number) {
        return Ok(Expr::Number { text:     token.text.clone(),
                                 position: token.position, });
    }
    if let Some(token) = tokens.next_if_kind(TokenKind::Variable) {
        return Ok(Expr::Variable { name:     token.text.clone(),
                                   position: token.position, });
    }
    Err(ParseError::ExpectedAtom { position: tokens.position() })
}

/// Parses a parenthesized formula, or falls back to an atom.
///
/// Grammar: `parenthesized := "(" formula ")" | atom`
///
/// # Errors
/// Returns [`ParseError::Expected`] with `rpar` when the closing parenthesis
/// is missing, [`ParseError::NestingTooDeep`] past
/// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::utils::MAX_NESTING_DEPTH)
/// open groups, and any error raised by the inner formula.
pub fn parse_parenthesized(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if let Some(open) = tokens.next_if_kind(TokenKind::LPar) {
        tokens.open_group(open.position)?;
        let inner = parse_formula(tokens)?;
        tokens.require(TokenKind::RPar)?;
        tokens.close_group();
        return Ok(inner);
    }
    parse_atom(tokens)
}

/// Parses a chain of operands joined by arithmetic operators.
///
/// All of `+ - * / %` share a single precedence level and associate to the
/// left, so `2 + 3 * 4` groups as `(2 + 3) * 4`.
///
/// Grammar: `formula := parenthesized (("+" | "-" | "*" | "/" | "%") parenthesized)*`
///
/// # Errors
/// Propagates errors from the operands.
pub fn parse_formula(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_parenthesized(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = ArithmeticOperator::from_token(token.kind)
        {
            tokens.advance();
            let right = parse_parenthesized(tokens)?;
            left = Expr::BinaryOp { op: op.into(),
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    position: token.position };
            continue;
        }
        break;
    }
    Ok(left)
}
