use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, next_token, parse_identifier},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration, introduced by `var`,
/// - a print statement, introduced by `print` or `println`,
/// - an assignment, which is what every other statement is parsed as.
///
/// Grammar: `statement := var_decl | print | assignment`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "statement".to_string() });
    };

    match token.kind {
        TokenKind::Var => parse_variable_declaration(tokens),
        TokenKind::Print | TokenKind::Println => parse_print(tokens),
        _ => parse_assignment(tokens),
    }
}

/// Parses a variable declaration statement.
///
/// Grammar: `var_decl := "var" identifier "=" expression ";"`
///
/// # Errors
/// Returns a `ParseError` if the identifier, `=`, the expression or the
/// closing `;` is missing or malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = expect(tokens, &TokenKind::Var)?.line;
    let name = parse_identifier(tokens)?;
    expect(tokens, &TokenKind::Equals)?;
    let value = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Statement::VariableDeclaration { name, value, line })
}

/// Parses an assignment statement.
///
/// Grammar: `assignment := identifier "=" expression ";"`
///
/// # Errors
/// Returns a `ParseError` if the statement does not start with an identifier,
/// or if `=`, the expression or the closing `;` is missing or malformed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = tokens.peek().map_or(0, |token| token.line);
    let name = parse_identifier(tokens)?;
    expect(tokens, &TokenKind::Equals)?;
    let value = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Statement::Assignment { name, value, line })
}

/// Parses a `print` or `println` statement.
///
/// Grammar: `print := ("print" | "println") "(" expression ")" ";"`
///
/// # Errors
/// Returns a `ParseError` if a parenthesis, the expression or the closing `;`
/// is missing or malformed.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = next_token(tokens, "'print'")?;
    let line = keyword.line;

    expect(tokens, &TokenKind::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::RParen)?;
    expect(tokens, &TokenKind::Semicolon)?;

    if keyword.kind == TokenKind::Println {
        Ok(Statement::Println { expr, line })
    } else {
        Ok(Statement::Print { expr, line })
    }
}
