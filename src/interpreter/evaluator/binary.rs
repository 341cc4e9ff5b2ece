use crate::{
    ast::{ArithmeticOperator, Expr},
    error::{EvalError, EvalResult},
    interpreter::evaluator::core::Context,
};

impl Context {
    /// Evaluates an assignment of `value` to `target`.
    ///
    /// The target is checked before the value is evaluated, so a failed
    /// assignment never touches the store. On success the value is stored and
    /// returned.
    ///
    /// # Errors
    /// Returns [`EvalError::InvalidAssignmentTarget`] when `target` is not a
    /// variable, and propagates errors from `value`.
    pub fn eval_assignment(&mut self, target: &Expr, value: &Expr) -> EvalResult<f64> {
        let Expr::Variable { name, .. } = target else {
            return Err(EvalError::InvalidAssignmentTarget { target: target.to_string() });
        };
        let value = self.eval(value)?;
        self.variables.set(name.as_str(), value);
        Ok(value)
    }

    /// Applies an arithmetic operator with IEEE 754 semantics.
    ///
    /// Division by zero yields an infinity or `NaN` rather than an error, and
    /// `%` is the truncated remainder whose sign follows the dividend.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::ArithmeticOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::apply_arithmetic(ArithmeticOperator::Rem, 7.0, 4.0), 3.0);
    /// assert!(Context::apply_arithmetic(ArithmeticOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply_arithmetic(op: ArithmeticOperator, left: f64, right: f64) -> f64 {
        match op {
            ArithmeticOperator::Add => left + right,
            ArithmeticOperator::Sub => left - right,
            ArithmeticOperator::Mul => left * right,
            ArithmeticOperator::Div => left / right,
            ArithmeticOperator::Rem => left % right,
        }
    }
}
