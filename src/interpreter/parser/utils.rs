use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Builds the error for a token that does not fit the grammar.
pub(in crate::interpreter::parser) fn unexpected(token: &Token, expected: &str) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    token.kind.to_string(),
                                  line:     token.line,
                                  column:   token.column, }
}

/// Consumes the next token, failing if the sequence has run out.
pub(in crate::interpreter::parser) fn next_token<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &str)
                                                        -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next()
          .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected: expected.to_string() })
}

/// Consumes the next token and checks that it is of kind `kind`.
///
/// Only meaningful for payload-free kinds such as punctuation and keywords.
///
/// # Errors
/// Returns a `ParseError` naming `kind` if the next token differs or the input
/// ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let expected = kind.to_string();
    let token = next_token(tokens, &expected)?;

    if token.kind == *kind {
        Ok(token)
    } else {
        Err(unexpected(token, &expected))
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    let token = next_token(tokens, "identifier")?;
    match &token.kind {
        TokenKind::Identifier(name) => Ok(name.clone()),
        _ => Err(unexpected(token, "identifier")),
    }
}
