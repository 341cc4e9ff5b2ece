use crate::{
    ast::{BinaryOperator, Expr, Program, Statement},
    error::{EvalError, EvalResult},
    interpreter::store::VariableStore,
};

/// Stores the runtime evaluation context.
///
/// The context owns the [`VariableStore`] and is the only place where it is
/// mutated. It is created once per interpreter and reused for every line, so
/// assignments made on one line are visible on the next.
#[derive(Debug, Default)]
pub struct Context {
    /// Values assigned so far.
    pub variables: VariableStore,
}

impl Context {
    /// Creates a context with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context over an existing store.
    #[must_use]
    pub const fn with_variables(variables: VariableStore) -> Self {
        Self { variables }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Flat chains
    /// nest one level per operator on their left side, so that spine is
    /// walked with a loop: the leftmost operand is evaluated first, then each
    /// right operand is evaluated and folded in with
    /// [`Context::apply_arithmetic`]. Right operands only nest through
    /// parentheses, which the parser limits. Assignments are handled by
    /// [`Context::eval_assignment`].
    ///
    /// # Errors
    /// Returns an [`EvalError`] for unknown variables, malformed literals and
    /// invalid assignment targets.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// let expr = Expr::Number { text:     "2.5".to_string(),
    ///                           position: 0, };
    ///
    /// assert_eq!(context.eval(&expr), Ok(2.5));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        let mut spine = Vec::new();
        let mut node = expr;
        let mut value = loop {
            match node {
                Expr::BinaryOp { op: BinaryOperator::Arithmetic(op),
                                 left,
                                 right,
                                 .. } => {
                    spine.push((*op, right.as_ref()));
                    node = left.as_ref();
                },
                Expr::BinaryOp { op: BinaryOperator::Assign,
                                 left,
                                 right,
                                 .. } => break self.eval_assignment(left, right)?,
                Expr::Number { text, .. } => break Self::eval_number(text)?,
                Expr::Variable { name, .. } => break self.eval_variable(name)?,
            }
        };

        for (op, right) in spine.into_iter().rev() {
            let right = self.eval(right)?;
            value = Self::apply_arithmetic(op, value, right);
        }
        Ok(value)
    }

    /// Evaluates a single statement.
    ///
    /// # Errors
    /// See [`Context::eval`].
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        self.eval(&statement.expr)
    }

    /// Evaluates every statement of a program in order.
    ///
    /// The value of a program is the value of its last statement. Assignments
    /// made by earlier statements stay in the store even if a later statement
    /// fails.
    ///
    /// # Errors
    /// Returns the first error raised by a statement, or
    /// [`EvalError::EmptyProgram`] if there are no statements.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<f64> {
        let mut result = None;
        for statement in &program.statements {
            result = Some(self.eval_statement(statement)?);
        }
        result.ok_or(EvalError::EmptyProgram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::parse_program};

    fn run(context: &mut Context, source: &str) -> EvalResult<f64> {
        let tokens = tokenize(source).unwrap();
        let program = parse_program(&tokens, source.len()).unwrap();
        context.eval_program(&program)
    }

    #[test]
    fn evaluates_flat_chains_left_to_right() {
        let mut context = Context::new();
        assert_eq!(run(&mut context, "2 + 3 * 4"), Ok(20.0));
        assert_eq!(run(&mut context, "2 + (3 * 4)"), Ok(14.0));
        assert_eq!(run(&mut context, "10 - 4 - 3"), Ok(3.0));
    }

    #[test]
    fn assignment_stores_and_returns_value() {
        let mut context = Context::new();
        assert_eq!(run(&mut context, "x = 4 / 2"), Ok(2.0));
        assert_eq!(context.variables.get("x"), Some(2.0));
        assert_eq!(run(&mut context, "x % 3 + x"), Ok(4.0));
    }

    #[test]
    fn reassignment_can_read_the_old_value() {
        let mut context = Context::new();
        run(&mut context, "n = 1").unwrap();
        assert_eq!(run(&mut context, "n = n + 1"), Ok(2.0));
        assert_eq!(context.variables.get("n"), Some(2.0));
    }

    #[test]
    fn last_statement_wins() {
        let mut context = Context::new();
        assert_eq!(run(&mut context, "a = 1 b = 2 a + b"), Ok(3.0));
        assert_eq!(context.variables.len(), 2);
    }

    #[test]
    fn earlier_assignments_survive_a_failure() {
        let mut context = Context::new();
        assert_eq!(run(&mut context, "a = 1 missing"),
                   Err(EvalError::UnknownVariable { name:       "missing".into(),
                                                    suggestion: None, }));
        assert_eq!(context.variables.get("a"), Some(1.0));
    }

    #[test]
    fn failed_assignment_stores_nothing() {
        let mut context = Context::new();
        assert!(run(&mut context, "x = y + 1").is_err());
        assert!(!context.variables.contains("x"));
    }

    #[test]
    fn zero_valued_variables_can_be_read() {
        let mut context = Context::new();
        run(&mut context, "x = 0").unwrap();
        assert_eq!(run(&mut context, "x"), Ok(0.0));
    }

    #[test]
    fn long_chains_fold_without_recursion() {
        let mut context = Context::new();
        run(&mut context, "step = 2").unwrap();
        let source = format!("0{}", " + step".repeat(200_000));
        assert_eq!(run(&mut context, &source), Ok(400_000.0));
    }

    #[test]
    fn chain_stops_at_the_first_failing_operand() {
        let mut context = Context::new();
        let source = format!("1{} + missing{}", " + 1".repeat(1_000), " + 1".repeat(1_000));
        assert_eq!(run(&mut context, &source),
                   Err(EvalError::UnknownVariable { name:       "missing".into(),
                                                    suggestion: None, }));
    }

    #[test]
    fn right_nested_groups_evaluate() {
        let mut context = Context::new();
        let source = format!("0{}{}", " - (1".repeat(100), ")".repeat(100));
        // 0 - (1 - (1 - ...)) with an even number of ones.
        assert_eq!(run(&mut context, &source), Ok(0.0));
    }

    #[test]
    fn empty_program_has_no_value() {
        let mut context = Context::new();
        assert_eq!(context.eval_program(&Program::default()), Err(EvalError::EmptyProgram));
    }
}
