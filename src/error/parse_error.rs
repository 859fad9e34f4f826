#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// Description of what the parser expected.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// The token sequence ran out without an end-of-input sentinel.
    UnexpectedEndOfInput {
        /// Description of what the parser expected.
        expected: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => write!(f,
                                                        "line {line}, column {column}: Expected {expected}, found {found}."),
            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Unexpected end of input, expected {expected}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
