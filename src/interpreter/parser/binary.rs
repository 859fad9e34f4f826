use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::{core::ParseResult, primary::parse_primary},
        token::{Token, TokenKind},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `10 - 3 - 2`
/// parses as `(10 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let line = token.line;
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// `+` and `-`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// A binary expression tree combining primary expressions.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_primary(tokens)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let line = token.line;
        tokens.next();
        let right = parse_primary(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not an operator.
///
/// # Example
/// ```
/// use midlang::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Star),
///            Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&TokenKind::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
