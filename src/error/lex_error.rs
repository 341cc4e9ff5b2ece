/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// No token kind matched at `position`.
    #[error("Error at {position} position: unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The character that could not be tokenized.
        character: char,
        /// Byte offset of the character in the source line.
        position:  usize,
    },
}

impl LexError {
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } => *position,
        }
    }
}
