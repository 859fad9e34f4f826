use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            console::Console,
            core::{Context, EvalResult},
        },
        value::Value,
    },
};

impl Context {
    /// Evaluates `inputString()`: one line from the console, as-is.
    pub(crate) fn eval_input_string<C>(console: &mut C, line: usize) -> EvalResult<Value>
        where C: Console + ?Sized
    {
        Self::read_input_line(console, line).map(Value::Str)
    }

    /// Evaluates `inputInt()`: one line from the console, parsed as an integer.
    ///
    /// Surrounding whitespace is ignored. Anything else that is not a valid
    /// 64-bit integer is a `RuntimeError::InvalidIntegerInput`.
    pub(crate) fn eval_input_int<C>(console: &mut C, line: usize) -> EvalResult<Value>
        where C: Console + ?Sized
    {
        let input = Self::read_input_line(console, line)?;

        let parsed = input.trim().parse::<i64>();

        parsed.map(Value::Int)
              .map_err(|_| RuntimeError::InvalidIntegerInput { input, line })
    }

    /// Reads one line, turning an exhausted input into an error.
    fn read_input_line<C>(console: &mut C, line: usize) -> EvalResult<String>
        where C: Console + ?Sized
    {
        match console.read_line() {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Err(RuntimeError::InputClosed { line }),
            Err(source) => Err(RuntimeError::Io { source, line }),
        }
    }
}
