use logos::Logos;

use crate::{
    error::LexErrorKind,
    interpreter::lexer::{lex_char, lex_integer, lex_newline, lex_string},
};

/// The kind of a lexical token, together with any decoded payload.
///
/// Patterns are matched by `logos`; string and char literals are scanned by
/// hand in callbacks so that escape sequences and unterminated literals can be
/// reported precisely.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t]+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", lex_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello\n"`. Carries the unescaped text.
    #[token("\"", lex_string)]
    Str(String),
    /// Char literal tokens, such as `'a'` or `'\t'`.
    #[token("'", lex_char)]
    Char(char),
    /// `var`
    #[token("var")]
    Var,
    /// `print`
    #[token("print")]
    Print,
    /// `println`
    #[token("println")]
    Println,
    /// `inputInt`
    #[token("inputInt")]
    InputInt,
    /// `inputString`
    #[token("inputString")]
    InputString,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Line terminators. Never emitted; only updates the line bookkeeping.
    #[regex(r"\r?\n", lex_newline)]
    NewLine,
    /// Sentinel appended after the last token of a successful tokenization.
    EndOfInput,
    /// A lexical error. Tokenization stops right after producing one.
    Error(String),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, so that columns can be computed for every token.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A token produced by the lexer.
///
/// Tokens are immutable once produced and keep the exact source text they
/// were scanned from alongside their 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The source text of the token. Empty for [`TokenKind::EndOfInput`].
    pub lexeme: String,
    /// Line of the first character of the token.
    pub line:   usize,
    /// Column of the first character of the token, counted in characters.
    pub column: usize,
}

impl Token {
    /// Returns `true` if this token marks a lexical error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "integer {n}"),
            Self::Str(s) => write!(f, "string {s:?}"),
            Self::Char(c) => write!(f, "char {c:?}"),
            Self::Var => write!(f, "'var'"),
            Self::Print => write!(f, "'print'"),
            Self::Println => write!(f, "'println'"),
            Self::InputInt => write!(f, "'inputInt'"),
            Self::InputString => write!(f, "'inputString'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Equals => write!(f, "'='"),
            Self::Semicolon => write!(f, "';'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::NewLine => write!(f, "line break"),
            Self::EndOfInput => write!(f, "end of input"),
            Self::Error(message) => write!(f, "invalid token ({message})"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.kind, self.line, self.column)
    }
}
