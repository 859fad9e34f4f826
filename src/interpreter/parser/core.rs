use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        parser::{binary::parse_additive, statement::parse_statement},
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into a [`Program`].
///
/// Statements are parsed until the end-of-input token. The first grammar
/// violation aborts the whole parse; no partial program is returned.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use midlang::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let program = parse(&tokenize("var x = 1; print(x);")).unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse(&tokenize("print(1)")).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    parse_program(&mut tokens.iter().peekable())
}

/// Parses statements until the end-of-input token.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first statement.
///
/// # Returns
/// The parsed program, statements in source order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();

    while let Some(token) = tokens.peek() {
        if token.kind == TokenKind::EndOfInput {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    tracing::debug!(statements = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}
