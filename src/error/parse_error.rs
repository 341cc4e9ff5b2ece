use crate::interpreter::lexer::TokenKind;

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A token of a specific kind was required but something else (or
    /// nothing) was found.
    #[error("{expected} expected at {position} position.")]
    Expected {
        /// The kind that was required.
        expected: TokenKind,
        /// Offset of the offending token, or the length of the line when the
        /// input ran out.
        position: usize,
    },
    /// Neither a number nor a variable appeared where an operand is required.
    #[error("Expected number or variable on {position} position.")]
    ExpectedAtom {
        /// Offset of the offending token, or the length of the line when the
        /// input ran out.
        position: usize,
    },
    /// Parentheses were nested deeper than the parser accepts.
    #[error("Parentheses nested deeper than {limit} levels at {position} position.")]
    NestingTooDeep {
        /// The deepest nesting that is accepted.
        limit:    usize,
        /// Offset of the first `(` past the limit.
        position: usize,
    },
    /// The line contained no tokens at all.
    #[error("Nothing to evaluate.")]
    EmptyInput,
}

impl ParseError {
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Expected { position, .. }
            | Self::ExpectedAtom { position }
            | Self::NestingTooDeep { position, .. } => Some(*position),
            Self::EmptyInput => None,
        }
    }
}
