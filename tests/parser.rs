use midlang::{
    ast::{BinaryOperator, Expr, Statement},
    error::ParseError,
    parse, tokenize,
};

fn parse_source(src: &str) -> Result<Vec<Statement>, ParseError> {
    parse(&tokenize(src)).map(|program| program.statements)
}

fn int(value: i64) -> Expr {
    Expr::IntLiteral { value, line: 1 }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

fn printed_expr(src: &str) -> Expr {
    match parse_source(src).unwrap().remove(0) {
        Statement::Print { expr, .. } => expr,
        other => panic!("expected a print statement, got {other:?}"),
    }
}

#[test]
fn statement_kinds() {
    let statements = parse_source("var a = 1;\na = 'x';\nprint(a);\nprintln(\"s\");").unwrap();

    assert_eq!(statements,
               vec![Statement::VariableDeclaration { name:  "a".to_string(),
                                                     value: int(1),
                                                     line:  1, },
                    Statement::Assignment { name:  "a".to_string(),
                                            value: Expr::CharLiteral { value: 'x',
                                                                       line:  2, },
                                            line:  2, },
                    Statement::Print { expr: Expr::Variable { name: "a".to_string(),
                                                              line: 3, },
                                       line: 3, },
                    Statement::Println { expr: Expr::StringLiteral { text: "s".to_string(),
                                                                     line: 4, },
                                         line: 4, }]);
}

#[test]
fn empty_program() {
    assert_eq!(parse_source("  \n\n").unwrap(), vec![]);
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(printed_expr("print(10 - 3 - 2);"),
               binary(binary(int(10), BinaryOperator::Sub, int(3)),
                      BinaryOperator::Sub,
                      int(2)));
}

#[test]
fn multiplication_has_higher_precedence() {
    assert_eq!(printed_expr("print(2 + 3 * 4);"),
               binary(int(2),
                      BinaryOperator::Add,
                      binary(int(3), BinaryOperator::Mul, int(4))));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(printed_expr("print((2 + 3) * 4);"),
               binary(binary(int(2), BinaryOperator::Add, int(3)),
                      BinaryOperator::Mul,
                      int(4)));
}

#[test]
fn input_expressions() {
    assert_eq!(printed_expr("print(inputInt() / inputString());"),
               binary(Expr::InputInt { line: 1 },
                      BinaryOperator::Div,
                      Expr::InputString { line: 1 }));
}

#[test]
fn missing_semicolon_is_error() {
    let error = parse_source("print(1)").unwrap_err();
    assert_eq!(error,
               ParseError::UnexpectedToken { expected: "';'".to_string(),
                                             found:    "end of input".to_string(),
                                             line:     1,
                                             column:   9, });
}

#[test]
fn non_keyword_statement_is_parsed_as_assignment() {
    let error = parse_source("5;").unwrap_err();
    assert!(matches!(&error, ParseError::UnexpectedToken { expected, .. } if expected == "identifier"));

    let error = parse_source("x + 1;").unwrap_err();
    assert!(matches!(&error, ParseError::UnexpectedToken { expected, found, .. }
                     if expected == "'='" && found == "'+'"));
}

#[test]
fn error_reports_position_of_found_token() {
    let error = parse_source("var a = 1;\nvar = 2;").unwrap_err();
    assert_eq!(error,
               ParseError::UnexpectedToken { expected: "identifier".to_string(),
                                             found:    "'='".to_string(),
                                             line:     2,
                                             column:   5, });
    assert_eq!(error.to_string(),
               "line 2, column 5: Expected identifier, found '='.");
}

#[test]
fn input_requires_empty_parentheses() {
    assert!(parse_source("x = inputInt;").is_err());
    assert!(parse_source("x = inputString(1);").is_err());
}

#[test]
fn missing_operand_is_error() {
    let error = parse_source("print(1 + );").unwrap_err();
    assert!(matches!(&error, ParseError::UnexpectedToken { expected, found, .. }
                     if expected == "expression" && found == "')'"));
}

#[test]
fn token_sequence_without_sentinel() {
    let mut tokens = tokenize("print(1);");
    tokens.pop();
    assert_eq!(parse(&tokens).unwrap().statements.len(), 1);

    tokens.truncate(3);
    assert!(matches!(parse(&tokens), Err(ParseError::UnexpectedEndOfInput { .. })));
}
