/// Entry points of the parser.
///
/// Parses whole programs and full expressions; every other parsing routine is
/// reached from here.
pub mod core;

/// Statement parsing.
///
/// Handles variable declarations, assignments and print statements.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Parses the atoms of the expression grammar: literals, variables, input
/// expressions and parenthesized expressions.
pub mod primary;

/// Utility functions for the parser.
///
/// Provides token expectation helpers shared by the other parser modules.
pub mod utils;
