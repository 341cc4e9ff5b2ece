/// Core evaluation logic and context management.
///
/// Contains the evaluation context, which owns the variable store, and the
/// tree walk over expressions, statements and programs.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators on `f64` operands.
pub mod binary;

/// Utility functions for evaluation.
///
/// Literal conversion and variable lookup helpers.
pub mod utils;
