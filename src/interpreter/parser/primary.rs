use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, next_token, unexpected},
        },
        token::{Token, TokenKind},
    },
};

const EXPECTED_FACTOR: &str = "expression";

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, string and char literals
/// - `inputInt()` and `inputString()`
/// - identifiers
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := INTEGER | STRING | CHAR
///              | "inputInt" "(" ")" | "inputString" "(" ")"
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens, EXPECTED_FACTOR)?;
    let line = token.line;

    match &token.kind {
        TokenKind::Integer(value) => Ok(Expr::IntLiteral { value: *value,
                                                           line }),
        TokenKind::Str(text) => Ok(Expr::StringLiteral { text: text.clone(),
                                                         line }),
        TokenKind::Char(value) => Ok(Expr::CharLiteral { value: *value,
                                                         line }),
        TokenKind::Identifier(name) => Ok(Expr::Variable { name: name.clone(),
                                                           line }),
        TokenKind::InputInt => {
            parse_empty_arguments(tokens)?;
            Ok(Expr::InputInt { line })
        },
        TokenKind::InputString => {
            parse_empty_arguments(tokens)?;
            Ok(Expr::InputString { line })
        },
        TokenKind::LParen => parse_grouping(tokens),
        _ => Err(unexpected(token, EXPECTED_FACTOR)),
    }
}

/// Parses the empty argument list `()` of an input expression.
fn parse_empty_arguments<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, &TokenKind::LParen)?;
    expect(tokens, &TokenKind::RParen)?;
    Ok(())
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::RParen)?;
    Ok(expr)
}
