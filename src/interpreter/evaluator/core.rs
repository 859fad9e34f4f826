use std::collections::HashMap;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{evaluator::console::Console, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: a single flat namespace mapping
/// variable names to their current values. A fresh context is created for
/// every run, so independent runs never see each other's variables.
#[derive(Debug, Default)]
pub struct Context {
    variables: HashMap<String, Value>,
}

impl Context {
    /// Creates a new evaluation context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of a variable.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Executes every statement of `program` in source order.
    ///
    /// The first runtime error stops the program; later statements do not
    /// run.
    ///
    /// # Example
    /// ```
    /// use midlang::interpreter::{
    ///     evaluator::{console::Streams, core::Context},
    ///     lexer::tokenize,
    ///     parser::core::parse,
    /// };
    ///
    /// let program = parse(&tokenize("var x = 6 * 7; print(x);")).unwrap();
    /// let mut console = Streams::new(&b""[..], Vec::new());
    ///
    /// Context::new().eval_program(&program, &mut console).unwrap();
    /// assert_eq!(console.into_writer(), b"42\n");
    /// ```
    pub fn eval_program<C>(&mut self, program: &Program, console: &mut C) -> EvalResult<()>
        where C: Console + ?Sized
    {
        for statement in &program.statements {
            self.eval_statement(statement, console)?;
        }
        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// Declarations and assignments both evaluate their right-hand side and
    /// overwrite the binding; a declaration of an existing name is allowed.
    /// `print` and `println` write the text form of their value followed by a
    /// line terminator.
    pub fn eval_statement<C>(&mut self, statement: &Statement, console: &mut C) -> EvalResult<()>
        where C: Console + ?Sized
    {
        tracing::trace!(line = statement.line_number(), "executing statement");

        match statement {
            Statement::VariableDeclaration { name, value, .. }
            | Statement::Assignment { name, value, .. } => {
                let value = self.eval(value, console)?;
                self.set_variable(name, value);
                Ok(())
            },
            Statement::Print { expr, line } | Statement::Println { expr, line } => {
                let text = self.eval(expr, console)?.to_string();
                console.write_line(&text)
                       .map_err(|source| RuntimeError::Io { source,
                                                            line: *line })
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands of binary operators are evaluated left to right, so input
    /// expressions read their lines in source order.
    pub fn eval<C>(&self, expr: &Expr, console: &mut C) -> EvalResult<Value>
        where C: Console + ?Sized
    {
        match expr {
            Expr::IntLiteral { value, .. } => Ok(Value::Int(*value)),
            Expr::StringLiteral { text, .. } => Ok(Value::Str(text.clone())),
            Expr::CharLiteral { value, .. } => Ok(Value::from(*value)),
            Expr::Variable { name, line } => {
                self.get_variable(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left, console)?;
                let right = self.eval(right, console)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::InputInt { line } => Self::eval_input_int(console, *line),
            Expr::InputString { line } => Self::eval_input_string(console, *line),
        }
    }
}
