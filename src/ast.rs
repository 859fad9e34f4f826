/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models a distinct syntactic construct. Child expressions are
/// owned through `Box`, so the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42`.
    IntLiteral {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal such as `"hi"`, already unescaped.
    StringLiteral {
        /// The text of the literal.
        text: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A char literal such as `'a'`.
    CharLiteral {
        /// The single character.
        value: char,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (`+`, `-`, `*`, `/`).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator in the source code.
        line:  usize,
    },
    /// `inputInt()`: reads one line from the console as an integer.
    InputInt {
        /// Line number in the source code.
        line: usize,
    },
    /// `inputString()`: reads one line from the console as text.
    InputString {
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use midlang::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::IntLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::CharLiteral { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::InputInt { line }
            | Self::InputString { line } => *line,
        }
    }
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable declaration: `var <name> = <expr>;`.
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A variable assignment: `<name> = <expr>;`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print(<expr>);`
    Print {
        /// The expression whose value is written.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `println(<expr>);`, which prints exactly like `print`.
    Println {
        /// The expression whose value is written.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number the statement starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VariableDeclaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Print { line, .. }
            | Self::Println { line, .. } => *line,
        }
    }
}

/// A whole program: its statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The statements of the program.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Concatenation of the text forms of both operands (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
