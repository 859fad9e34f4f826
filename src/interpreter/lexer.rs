use logos::{Lexer, Logos, Skip};

use crate::{
    error::{LexError, LexErrorKind},
    interpreter::token::{LexerExtras, Token, TokenKind},
};

/// Converts source text into a token sequence.
///
/// On success the sequence is terminated by a [`TokenKind::EndOfInput`]
/// token. The first lexical error aborts tokenization: the returned sequence
/// then ends with a [`TokenKind::Error`] token and nothing after it.
///
/// Tokenization is pure; the same text always yields the same tokens.
///
/// # Example
/// ```
/// use midlang::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let tokens = tokenize("var x = 42;");
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Var,
///                 TokenKind::Identifier("x".to_string()),
///                 TokenKind::Equals,
///                 TokenKind::Integer(42),
///                 TokenKind::Semicolon,
///                 TokenKind::EndOfInput]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let (line, column) = position(&lexer, lexer.span().start);
        let lexeme = lexer.slice().to_string();

        match result {
            Ok(kind) => {
                // Escaped line feeds inside string literals still start a new line.
                if let Some(last) = lexeme.rfind('\n') {
                    lexer.extras.line += lexeme.matches('\n').count();
                    lexer.extras.line_start = lexer.span().start + last + 1;
                }
                tokens.push(Token { kind,
                                    lexeme,
                                    line,
                                    column });
            },
            Err(error) => {
                tracing::debug!(line, column, %error, "tokenization aborted");
                tokens.push(Token { kind: TokenKind::Error(error.describe(&lexeme)),
                                    lexeme,
                                    line,
                                    column });
                return tokens;
            },
        }
    }

    let (line, column) = position(&lexer, source.len());
    tokens.push(Token { kind: TokenKind::EndOfInput,
                        lexeme: String::new(),
                        line,
                        column });
    tokens
}

/// Tokenizes `source` and turns a trailing error token into a [`LexError`].
///
/// # Errors
/// Returns the first lexical error found in `source`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = tokenize(source);

    match tokens.last() {
        Some(Token { kind: TokenKind::Error(message),
                     line,
                     column,
                     .. }) => Err(LexError { message: message.clone(),
                                             line:    *line,
                                             column:  *column, }),
        _ => Ok(tokens),
    }
}

/// Computes the 1-based line and character column of a byte offset on the
/// lexer's current line.
fn position(lexer: &Lexer<TokenKind>, offset: usize) -> (usize, usize) {
    let line_start = lexer.extras.line_start.min(offset);
    let column = lexer.source()[line_start..offset].chars().count() + 1;
    (lexer.extras.line, column)
}

/// Records a line terminator and skips it.
pub(crate) fn lex_newline(lex: &mut Lexer<TokenKind>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

/// Parses a run of decimal digits into an `i64`.
pub(crate) fn lex_integer(lex: &mut Lexer<TokenKind>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::IntegerTooLarge)
}

/// Scans the body of a string literal after its opening `"`.
///
/// The closing quote is consumed. A raw line terminator or the end of input
/// before the closing quote is an error.
pub(crate) fn lex_string(lex: &mut Lexer<TokenKind>) -> Result<String, LexErrorKind> {
    let mut text = String::new();
    let mut chars = lex.remainder().char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(offset + 1);
                return Ok(text);
            },
            '\\' => match chars.next() {
                Some((_, escaped)) => text.push(unescape(escaped)),
                None => return Err(LexErrorKind::UnterminatedString),
            },
            '\n' | '\r' => return Err(LexErrorKind::UnterminatedString),
            c => text.push(c),
        }
    }

    Err(LexErrorKind::UnterminatedString)
}

/// Scans a char literal after its opening `'`.
///
/// Exactly one character (or one escape sequence) must be followed by the
/// closing `'`.
pub(crate) fn lex_char(lex: &mut Lexer<TokenKind>) -> Result<char, LexErrorKind> {
    let mut chars = lex.remainder().char_indices();

    let value = match chars.next() {
        Some((_, '\'')) => return Err(LexErrorKind::EmptyChar),
        Some((_, '\\')) => match chars.next() {
            Some((_, '\n' | '\r')) | None => return Err(LexErrorKind::UnterminatedChar),
            Some((_, escaped)) => unescape(escaped),
        },
        Some((_, '\n' | '\r')) | None => return Err(LexErrorKind::UnterminatedChar),
        Some((_, c)) => c,
    };

    match chars.next() {
        Some((offset, '\'')) => {
            lex.bump(offset + 1);
            Ok(value)
        },
        _ => Err(LexErrorKind::UnterminatedChar),
    }
}

/// Maps the character after a backslash to the character it stands for.
///
/// Unknown escapes pass through unchanged, so `\q` is just `q`.
const fn unescape(escaped: char) -> char {
    match escaped {
        'n' => '\n',
        't' => '\t',
        other => other,
    }
}
