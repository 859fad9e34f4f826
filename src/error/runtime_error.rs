use crate::ast::BinaryOperator;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic operator received a string operand.
    TypeMismatch {
        /// The operator that requires integers.
        op:   BinaryOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `inputInt()` read a line that is not an integer.
    InvalidIntegerInput {
        /// The line of text that was read.
        input: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The input stream was exhausted or closed.
    InputClosed {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from or writing to the console failed.
    Io {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "line {line}: Undefined variable '{name}'.")
            },
            Self::TypeMismatch { op, line } => write!(f,
                                                      "line {line}: Operator '{op}' requires integer operands."),
            Self::DivisionByZero { line } => write!(f, "line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "line {line}: Integer overflow while trying to compute result."),
            Self::InvalidIntegerInput { input, line } => {
                write!(f, "line {line}: Invalid integer input: '{input}'.")
            },
            Self::InputClosed { line } => {
                write!(f, "line {line}: Input stream closed while reading a line.")
            },
            Self::Io { source, line } => write!(f, "line {line}: Console I/O failed: {source}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
