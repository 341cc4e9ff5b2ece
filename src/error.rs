/// Lexing errors.
///
/// Raised by the tokenizer when no token kind accepts the character under the
/// cursor.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax errors raised while building the expression tree: a
/// required token that is missing, a missing operand, or an empty line.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while walking the tree, such as references to
/// identifiers that were never assigned.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
pub use lex_error::{LexError, LexResult};
pub use parse_error::{ParseError, ParseResult};

/// Any error that can abort a call to
/// [`Interpreter::run`](crate::Interpreter::run).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Returns the source offset the error points at, when it has one.
    ///
    /// Evaluation errors name an identifier rather than a position.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => e.position(),
            Self::Eval(_) => None,
        }
    }
}
