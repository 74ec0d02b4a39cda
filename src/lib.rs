//! # plotscript
//!
//! plotscript is a small Scheme-like language for numeric work and plotting,
//! written in Rust. It parses parenthesized programs, evaluates them over real
//! and complex numbers, lists and lambdas, and can run them on a background
//! kernel thread.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{session::Interpreter, value::expression::Expression};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors raised while parsing program text and the
/// faults raised while evaluating it. Both render a human-readable message
/// naming the offending construct.
///
/// # Responsibilities
/// - Defines `ParseError` for structural violations.
/// - Defines `SemanticError` for evaluation faults.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the kernel to provide a complete runtime for
/// plotscript programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating programs.
/// - Runs programs on a worker thread behind message queues.
pub mod interpreter;
/// General numeric helpers.
///
/// Provides approximate float comparison, checked conversions and `%g`-style
/// formatting used throughout the interpreter.
pub mod util;

/// Returns the value of a single program evaluated in a fresh environment.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use plotscript::{get_result, interpreter::value::expression::Expression};
///
/// let value = get_result("(begin (define r 10) (* r r))").unwrap();
/// assert_eq!(value, Expression::from(100.0));
///
/// // `x` is not defined.
/// assert!(get_result("(+ x 1)").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Expression, Box<dyn std::error::Error>> {
    Interpreter::new().run(source)
}
