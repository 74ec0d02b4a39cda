/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// an expression tree. Every variant is a structural violation of the input;
/// no partial tree is ever returned alongside one.
pub mod parse_error;
/// Semantic errors.
///
/// Contains all faults that can be raised during evaluation: unknown symbols,
/// wrong arity, bad argument kinds, protected-name redefinitions and domain
/// violations.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use semantic_error::SemanticError;
