//! # midlang
//!
//! midlang is an interpreter for a small scripting language written in Rust.
//! Programs declare and assign variables holding integers or strings, combine
//! them with `+ - * /`, read lines with `inputInt()` / `inputString()` and
//! print values. Source text goes through a lexer, a recursive-descent parser
//! and a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::{
    console::{Console, Streams},
    core::Context,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
pub mod ast;
/// Provides the error types of the three interpreter stages.
///
/// # Responsibilities
/// - Defines one error type per stage (lexer, parser, evaluator).
/// - Attaches line (and, before evaluation, column) numbers for context.
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code.
pub mod interpreter;

pub use crate::{
    ast::Program,
    interpreter::{
        lexer::{lex, tokenize},
        parser::core::parse,
        token::{Token, TokenKind},
        value::Value,
    },
};

/// Runs a program from source text against the given console.
///
/// The source is tokenized, parsed and evaluated in that order. The first
/// error of any stage stops the run: a lexical error means nothing is parsed,
/// a parse error means nothing is executed, and a runtime error skips all
/// remaining statements.
///
/// # Errors
/// Returns a [`error::LexError`], [`error::ParseError`] or
/// [`error::RuntimeError`].
///
/// # Examples
/// ```
/// use midlang::{interpreter::evaluator::console::Streams, run};
///
/// let mut console = Streams::new("Ada\n".as_bytes(), Vec::new());
/// let source = r#"var name = inputString(); print("Hi " + name); print(2 + 3 * 4);"#;
///
/// run(source, &mut console).unwrap();
/// assert_eq!(console.into_writer(), b"Hi Ada\n14\n");
///
/// // 'y' is never assigned.
/// let mut console = Streams::new(&b""[..], Vec::new());
/// assert!(run("print(y);", &mut console).is_err());
/// ```
pub fn run<C>(source: &str, console: &mut C) -> Result<(), Box<dyn std::error::Error>>
    where C: Console + ?Sized
{
    let tokens = lex(source)?;
    tracing::debug!(tokens = tokens.len(), "tokenized source");

    let program = parse(&tokens)?;

    let mut context = Context::new();
    context.eval_program(&program, console)?;
    tracing::debug!("program finished");

    Ok(())
}

/// Runs a program from source text against the process's stdin and stdout.
///
/// # Errors
/// See [`run`].
pub fn run_with_stdio(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    run(source, &mut Streams::stdio())
}
