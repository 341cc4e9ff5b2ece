use crate::{
    error::{EvalError, EvalResult},
    interpreter::evaluator::core::Context,
    util::{num::parse_float_prefix, suggest::closest_match_within},
};

/// Largest edit distance for which an unknown variable gets a suggestion.
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

impl Context {
    /// Converts a numeric literal to its value.
    ///
    /// The literal is read up to the first character that cannot extend a
    /// decimal number, so `1.2.3` evaluates to `1.2`.
    ///
    /// # Errors
    /// Returns [`EvalError::MalformedNumber`] if the literal has no digits.
    pub fn eval_number(text: &str) -> EvalResult<f64> {
        parse_float_prefix(text).ok_or_else(|| EvalError::MalformedNumber { text: text.to_owned() })
    }

    /// Looks up a variable in the store.
    ///
    /// # Errors
    /// Returns [`EvalError::UnknownVariable`] if `name` was never assigned. The
    /// error carries the closest known names when one is near enough.
    pub fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.variables.get(name).ok_or_else(|| {
            let suggestion =
                closest_match_within(name, self.variables.names(), MAX_SUGGESTION_DISTANCE);
            EvalError::UnknownVariable { name: name.to_owned(),
                                         suggestion }
        })
    }
}
