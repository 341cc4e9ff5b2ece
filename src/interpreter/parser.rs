/// Core grammar levels: atoms, parenthesized groups and formulas.
///
/// These functions build expression nodes from the token stream. Operators
/// share one precedence level and fold left to right.
pub mod core;

/// Statement and program parsing.
///
/// Decides between assignment and plain formula statements and loops over the
/// whole line.
pub mod statement;

/// Token stream helpers shared by the grammar functions.
pub mod utils;

pub use statement::{parse_program, parse_statement};
pub use utils::TokenStream;
