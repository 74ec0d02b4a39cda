/// Numeric helpers.
///
/// This module provides the epsilon-tolerant comparison used by atom
/// equality, a lossless `usize` to `f64` conversion for list lengths, and the
/// significant-digit formatting used for plot tick labels.
pub mod num;
