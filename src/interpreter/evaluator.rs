/// Core evaluation logic and context management.
///
/// Contains the runtime context with its variable store, and the dispatch over
/// statements and expressions.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements `+` as concatenation of text forms and the integer-only
/// operators `-`, `*` and `/`.
pub mod binary;

/// Evaluation of `inputInt()` and `inputString()`.
pub mod input;

/// The console the evaluator reads input lines from and prints to.
pub mod console;
