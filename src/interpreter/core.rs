use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context, lexer::Tokenizer, parser::parse_program, store::VariableStore,
    },
};

/// Runs source lines against a persistent set of variables.
///
/// Each call to [`Interpreter::run`] tokenizes, parses and evaluates one line.
/// The tokenizer is reset for every line; the variable store is kept until the
/// interpreter is dropped.
///
/// `run` takes `&mut self`, so one interpreter evaluates one line at a time.
/// Share it across threads behind a `Mutex`.
#[derive(Debug, Default)]
pub struct Interpreter {
    tokenizer: Tokenizer,
    context:   Context,
}

impl Interpreter {
    /// Creates an interpreter with no variables defined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter that starts from an existing set of variables.
    #[must_use]
    pub fn with_variables(variables: VariableStore) -> Self {
        Self { tokenizer: Tokenizer::new(),
               context:   Context::with_variables(variables), }
    }

    /// Evaluates one line and returns its value.
    ///
    /// When the line holds several statements they run in order and the value
    /// of the last one is returned.
    ///
    /// # Errors
    /// Returns the first lexing, parsing or evaluation error. Nothing is
    /// evaluated if lexing or parsing fails; assignments performed before an
    /// evaluation error are kept.
    ///
    /// # Examples
    /// ```
    /// use tally::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// assert_eq!(interpreter.run("x = 5").unwrap(), 5.0);
    /// assert_eq!(interpreter.run("x * 2").unwrap(), 10.0);
    /// assert!(interpreter.run("y").is_err());
    /// ```
    pub fn run(&mut self, source: &str) -> Result<f64, Error> {
        let tokens = self.tokenizer.tokenize(source)?;
        debug!(tokens = tokens.len(), "tokenized line");

        let program = parse_program(tokens, source.len())?;
        debug!(statements = program.len(), "parsed line");

        let value = self.context.eval_program(&program)?;
        debug!(value, variables = self.context.variables.len(), "evaluated line");
        Ok(value)
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.context.variables
    }

    /// Mutable access to the variables, e.g. to seed or clear them.
    pub const fn variables_mut(&mut self) -> &mut VariableStore {
        &mut self.context.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, LexError, ParseError};

    #[test]
    fn variables_persist_between_lines() {
        let mut interpreter = Interpreter::new();
        interpreter.run("x = 1").unwrap();
        interpreter.run("y = x + 3").unwrap();
        assert_eq!(interpreter.run("x + y").unwrap(), 5.0);
    }

    #[test]
    fn errors_come_from_the_failing_stage() {
        let mut interpreter = Interpreter::new();
        assert!(matches!(interpreter.run("1 # 2"), Err(Error::Lex(LexError::UnexpectedCharacter { .. }))));
        assert!(matches!(interpreter.run("1 +"), Err(Error::Parse(ParseError::ExpectedAtom { .. }))));
        assert!(matches!(interpreter.run("q"), Err(Error::Eval(EvalError::UnknownVariable { .. }))));
    }

    #[test]
    fn parse_errors_evaluate_nothing() {
        let mut interpreter = Interpreter::new();
        assert!(interpreter.run("x = 1 (").is_err());
        assert!(interpreter.variables().is_empty());
    }

    #[test]
    fn seeded_variables_are_visible() {
        let mut variables = VariableStore::new();
        variables.set("pi", std::f64::consts::PI);
        let mut interpreter = Interpreter::with_variables(variables);
        assert_eq!(interpreter.run("pi").unwrap(), std::f64::consts::PI);
    }

    #[test]
    fn clearing_variables_forgets_them() {
        let mut interpreter = Interpreter::new();
        interpreter.run("x = 1").unwrap();
        interpreter.variables_mut().clear();
        assert!(interpreter.run("x").is_err());
    }
}
