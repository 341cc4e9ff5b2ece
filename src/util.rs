/// Numeric literal conversion.
///
/// Reads the value of the permissive numeric literals the tokenizer accepts.
pub mod num;
/// Nearest-name lookup.
///
/// Edit distance and closest-match helpers used to suggest a known variable
/// when an unknown one is referenced.
pub mod suggest;
