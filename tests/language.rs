use std::error::Error;

use midlang::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::evaluator::console::Streams,
    run,
};

/// Runs `src` with `input` as stdin and returns what was printed together with
/// the outcome.
fn execute(src: &str, input: &str) -> (String, Result<(), Box<dyn Error>>) {
    let mut console = Streams::new(input.as_bytes(), Vec::new());
    let result = run(src, &mut console);
    let output = String::from_utf8(console.into_writer()).expect("output is UTF-8");
    (output, result)
}

fn assert_output(src: &str, expected: &str) {
    assert_output_with_input(src, "", expected);
}

fn assert_output_with_input(src: &str, input: &str, expected: &str) {
    let (output, result) = execute(src, input);
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    assert_eq!(output, expected);
}

fn runtime_error(src: &str, input: &str) -> (String, RuntimeError) {
    let (output, result) = execute(src, input);
    let error = result.expect_err("Script succeeded but was expected to fail");
    match error.downcast::<RuntimeError>() {
        Ok(e) => (output, *e),
        Err(other) => panic!("Expected a runtime error, got: {other}"),
    }
}

#[test]
fn declaration_assignment_and_print() {
    assert_output("var x = 5; print(x);", "5\n");
    assert_output("var x = 5; x = 7; print(x);", "7\n");
    assert_output("x = 1; var x = 2; print(x);", "2\n");
    assert_output("var s = \"hello\"; print(s);", "hello\n");
    assert_output("", "");
}

#[test]
fn println_prints_like_print() {
    assert_output("print(1); println(2); print(3);", "1\n2\n3\n");
}

#[test]
fn subtraction_is_left_associative() {
    assert_output("print(10 - 3 - 2);", "5\n");
    assert_output("print(100 / 10 / 5);", "2\n");
    assert_output("print(2 * 3 * 4);", "24\n");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output("print(2 + 3 * 4);", "14\n");
    assert_output("print(20 - 3 * 4);", "8\n");
    assert_output("print((20 - 3) * 4);", "68\n");
}

#[test]
fn plus_always_concatenates() {
    assert_output("print(1 + 2);", "12\n");
    assert_output("var a = 4; var b = 5; print(a + b);", "45\n");
    assert_output("print(\"n = \" + 42);", "n = 42\n");
    assert_output("print(7 + \"!\");", "7!\n");
    assert_output("print('a' + 'b' + \"c\");", "abc\n");
    assert_output("print(1 + 2 * 3 - 4);", "12\n");
}

#[test]
fn char_and_string_literals_print_the_same() {
    assert_output("print('A'); print(\"A\");", "A\nA\n");
    assert_output("print('\\t' + \"x\");", "\tx\n");
}

#[test]
fn escape_sequences_in_strings() {
    assert_output(r#"print("a\nb");"#, "a\nb\n");
    assert_output(r#"print("say \"hi\"");"#, "say \"hi\"\n");
    assert_output(r#"print("back\\slash");"#, "back\\slash\n");
    assert_output(r#"print("\q");"#, "q\n");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("print(7 / 2);", "3\n");
    assert_output("print((0 - 7) / 2);", "-3\n");
}

#[test]
fn division_by_zero_is_error() {
    let (output, error) = runtime_error("x = 5; print(x / 0);", "");
    assert!(matches!(error, RuntimeError::DivisionByZero { line: 1 }));
    assert_eq!(output, "");
}

#[test]
fn undefined_variable_is_error() {
    let (_, error) = runtime_error("print(y);", "");
    assert!(matches!(&error, RuntimeError::UndefinedVariable { name, .. } if name == "y"));
    assert!(error.to_string().contains("'y'"));
}

#[test]
fn arithmetic_on_strings_is_error() {
    for op in ["-", "*", "/"] {
        let (_, error) = runtime_error(&format!("print(\"a\" {op} 1);"), "");
        assert!(matches!(error, RuntimeError::TypeMismatch { .. }));
        assert!(error.to_string().contains(op));
    }
}

#[test]
fn overflow_is_error() {
    let (_, error) = runtime_error("var big = 9223372036854775807; print(big * 2);", "");
    assert!(matches!(error, RuntimeError::Overflow { .. }));
}

#[test]
fn runtime_error_stops_remaining_statements() {
    let (output, error) = runtime_error("print(1);\nprint(missing);\nprint(3);", "");
    assert_eq!(output, "1\n");
    assert!(matches!(error, RuntimeError::UndefinedVariable { line: 2, .. }));
}

#[test]
fn input_expressions_read_lines_in_order() {
    assert_output_with_input("var name = inputString(); var n = inputInt(); print(name + \":\" + (n * 2));",
                             "Ada\n 21 \n",
                             "Ada:42\n");
    assert_output_with_input("print(inputInt() - inputInt());", "10\n3\n", "7\n");
    assert_output_with_input("print(inputString());", "with \\n kept\r\n", "with \\n kept\n");
}

#[test]
fn malformed_integer_input_is_error() {
    let (_, error) = runtime_error("var n = inputInt();", "twelve\n");
    assert!(matches!(&error, RuntimeError::InvalidIntegerInput { input, .. } if input == "twelve"));
}

#[test]
fn exhausted_input_is_error() {
    let (_, error) = runtime_error("var s = inputString();", "");
    assert!(matches!(error, RuntimeError::InputClosed { .. }));
}

#[test]
fn unterminated_string_executes_nothing() {
    let (output, result) = execute("print(1);\nvar s = \"abc", "");
    let error = result.expect_err("unterminated string must fail");
    let lex_error = error.downcast_ref::<LexError>()
                         .expect("expected a lexical error");
    assert_eq!((lex_error.line, lex_error.column), (2, 9));
    assert_eq!(output, "");
}

#[test]
fn parse_error_executes_nothing() {
    let (output, result) = execute("print(1);\nprint(2)", "");
    let error = result.expect_err("missing semicolon must fail");
    assert!(error.downcast_ref::<ParseError>().is_some());
    assert_eq!(output, "");
}

#[test]
fn reruns_produce_identical_output() {
    let src = "var a = 3; var b = a * a; print(\"b=\" + b); b = b - 1; print(b);";
    let (first, _) = execute(src, "");
    let (second, _) = execute(src, "");
    assert_eq!(first, second);
    assert_eq!(first, "b=9\n8\n");
}
