/// Core parsing logic.
///
/// Builds exactly one expression tree from a token sequence using an explicit
/// stack of in-progress nodes, and rejects any structurally invalid input.
pub mod core;
