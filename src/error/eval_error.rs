/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to read a variable that was never assigned.
    #[error("Invalid identifier. No variable with name '{name}' was found.{}", hint(.suggestion))]
    UnknownVariable {
        /// The name of the variable.
        name:       String,
        /// The closest known variable name(s), if any is close enough.
        suggestion: Option<String>,
    },
    /// A numeric literal contained no digits.
    #[error("Malformed number '{text}'.")]
    MalformedNumber {
        /// The literal text.
        text: String,
    },
    /// The left side of `=` was not a variable.
    #[error("Cannot assign to '{target}'; only variables can be assigned.")]
    InvalidAssignmentTarget {
        /// Source text of the rejected target.
        target: String,
    },
    /// A program without statements was evaluated.
    #[error("Nothing to evaluate.")]
    EmptyProgram,
}

#[allow(clippy::ref_option)]
fn hint(suggestion: &Option<String>) -> String {
    suggestion.as_ref()
              .map(|s| format!(" Did you mean '{s}'?"))
              .unwrap_or_default()
}
