/// The interpreter façade.
///
/// Ties the tokenizer, parser and evaluator together behind a single
/// line-at-a-time entry point, and owns the state that outlives a line.
pub mod core;
/// The evaluator module walks the tree and computes results.
///
/// The evaluator evaluates expressions and statements, performs the arithmetic
/// operations and records assignments in the variable store.
///
/// # Responsibilities
/// - Evaluates AST nodes with an exhaustive match over node kinds.
/// - Applies floating-point arithmetic without trapping on division by zero.
/// - Reports references to unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source lines for further parsing.
///
/// The tokenizer reads the raw source text and produces a sequence of tokens,
/// each with a kind, its exact text and its offset in the line. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens, dropping whitespace.
/// - Reports the offset of any character no token kind accepts.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent parser with one function per grammar
/// level: atom, parenthesized group, formula, statement and program.
///
/// # Responsibilities
/// - Converts tokens into expression nodes and statements.
/// - Reports missing tokens and operands with their source offset.
pub mod parser;
/// The variable store shared by every line run through one interpreter.
pub mod store;
