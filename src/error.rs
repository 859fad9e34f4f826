/// Lexical errors.
///
/// Defines the errors raised while turning source text into tokens, such as
/// unexpected characters and unterminated string or char literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. A parse error always names what was expected and what was found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include undefined variables, type mismatches, division by
/// zero, malformed numeric input and console failures.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
