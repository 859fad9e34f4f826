use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// `+` always converts both operands to their text form and concatenates
    /// them, even when both are integers. `-`, `*` and `/` require two
    /// integers; their results are checked for overflow and `/` rejects a zero
    /// divisor.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use midlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::Int(1), &Value::Int(2), 1);
    /// assert_eq!(sum.unwrap(), Value::from("12"));
    ///
    /// let product = Context::eval_binary(BinaryOperator::Mul, &Value::Int(3), &Value::Int(4), 1);
    /// assert_eq!(product.unwrap(), Value::Int(12));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match op {
            Add => Ok(Value::Str(format!("{left}{right}"))),
            Sub | Mul | Div => match (left, right) {
                (Value::Int(a), Value::Int(b)) => Self::eval_integer_op(op, *a, *b, line),
                (Value::Str(_), _) | (_, Value::Str(_)) => {
                    Err(RuntimeError::TypeMismatch { op, line })
                },
            },
        }
    }

    /// Applies an integer-only operator with overflow and zero-divisor checks.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(b)
            },
            BinaryOperator::Add => unreachable!("'+' never reaches integer arithmetic"),
        };

        result.map(Value::Int)
              .ok_or(RuntimeError::Overflow { line })
    }
}
