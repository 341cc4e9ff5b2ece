//! # tally
//!
//! tally is a tiny line-oriented calculator language written in Rust.
//! Each line is tokenized, parsed into an expression tree and evaluated
//! against a set of variables that persists from one line to the next.
//!
//! The language has numbers, variables, `+ - * / %`, assignment with `=` and
//! parentheses. All operators share one precedence level and group from left
//! to right, so `2 + 3 * 4` is `20`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, statements and programs that
/// represent a parsed line as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the node kinds of the language as a closed enum.
/// - Attaches source offsets to nodes for error reporting.
pub mod ast;
/// Provides the error types for lexing, parsing and evaluation.
///
/// Each stage has its own error enum; [`Error`] wraps all of them and is what
/// [`Interpreter::run`] returns.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source offsets or identifier names for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the variable
/// store, and exposes the [`Interpreter`] entry point.
pub mod interpreter;
/// General helpers: numeric literal conversion and nearest-name suggestions.
pub mod util;

pub use error::Error;
pub use interpreter::{core::Interpreter, store::VariableStore};

/// Evaluates a single line with a fresh interpreter.
///
/// Convenient for one-off expressions; variables assigned on the line are
/// discarded afterwards.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use tally::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 20.0);
/// assert_eq!(evaluate("r = 3 r * r").unwrap(), 9.0);
///
/// // 'x' is not defined
/// assert!(evaluate("x + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    Interpreter::new().run(source)
}
