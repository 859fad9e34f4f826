/// The reason a token could not be scanned.
///
/// This is the error type of the `logos` lexer. The default variant is what
/// `logos` reports when no pattern matches at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[default]
    UnexpectedCharacter,
    /// A string literal without a closing `"` on the same line.
    UnterminatedString,
    /// A char literal that is not closed right after its character.
    UnterminatedChar,
    /// The char literal `''`.
    EmptyChar,
    /// A run of digits that does not fit into a 64-bit integer.
    IntegerTooLarge,
}

impl LexErrorKind {
    /// Renders the diagnostic message for this error, given the offending
    /// source slice.
    #[must_use]
    pub fn describe(self, slice: &str) -> String {
        match self {
            Self::UnexpectedCharacter => format!("unexpected character {slice:?}"),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter => write!(f, "unexpected character"),
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::UnterminatedChar => write!(f, "unterminated character literal"),
            Self::EmptyChar => write!(f, "empty character literal"),
            Self::IntegerTooLarge => write!(f, "integer literal too large"),
        }
    }
}

/// A lexical error, located at the first character of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Diagnostic message, as carried by the error token.
    pub message: String,
    /// The source line where the error occurred.
    pub line:    usize,
    /// The source column where the error occurred.
    pub column:  usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "line {}, column {}: {}.",
               self.line, self.column, self.message)
    }
}

impl std::error::Error for LexError {}
