/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to exactly one of these two cases, and every
/// consumer matches on both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A piece of text. Char literals evaluate to a one-character `Str`.
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Returns the integer inside, or `None` for a string.
    ///
    /// # Example
    /// ```
    /// use midlang::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Int(7).as_int(), Some(7));
    /// assert_eq!(Value::from("7").as_int(), None);
    /// ```
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }
}

/// Formats the value the way `print` writes it: integers as decimal digits,
/// strings as themselves.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
