/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages the variable store, and talks to the console for input and output.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reads input lines for `inputInt()` and `inputString()`.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// literals, identifiers, keywords, operators and punctuation. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Decodes escape sequences in string and char literals.
/// - Stops at the first malformed token and reports it.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Applies operator precedence and left associativity.
/// - Reports the first grammar violation with its location.
pub mod parser;
/// The token vocabulary shared by the lexer and the parser.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// Values are either integers or strings; there is no third kind.
pub mod value;
