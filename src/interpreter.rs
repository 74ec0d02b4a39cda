/// The environment module holds the symbol table programs run against.
///
/// A single flat table maps symbols to values or builtin procedures. It is
/// seeded with the default constants and procedures and can be reset to that
/// state at any time.
pub mod environment;
/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks an expression, dispatches special forms, calls lambdas
/// and builtin procedures, and reports semantic faults such as unbound
/// symbols, arity mismatches or protected-name redefinitions.
///
/// # Responsibilities
/// - Evaluates expressions against an environment.
/// - Implements the special forms and the builtin procedure library.
/// - Reports faults as `SemanticError` values, never by panicking.
pub mod evaluator;
/// The kernel module runs programs on a background worker thread.
///
/// Programs travel through an inbound queue and results come back, in order,
/// through an outbound queue. The worker owns its environment; callers reset
/// or interrupt it by replacing the worker.
pub mod kernel;
/// The lexer module tokenizes program text for the parser.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// parentheses, string-literal quote markers and atomic text tokens, each
/// tagged with its source line. Comments and whitespace are dropped.
pub mod lexer;
/// The parser module builds a single expression tree from tokens.
///
/// # Responsibilities
/// - Turns the token sequence into a nested `Expression`.
/// - Infers number and symbol atoms and tags quoted text as string literals.
/// - Rejects malformed input with a `ParseError`.
pub mod parser;
/// Layout of plot glyphs built by `discrete-plot` and `continuous-plot`.
pub mod plot;
/// The session module pairs a parsed program with a persistent environment.
pub mod session;
/// The value module defines the runtime data types for evaluation.
///
/// Atoms are the terminal values (numbers, complex numbers, symbols and
/// string literals); expressions are trees of atoms that serve both as
/// syntax and as runtime values, with lists and lambdas encoded by their head
/// symbol.
pub mod value;
