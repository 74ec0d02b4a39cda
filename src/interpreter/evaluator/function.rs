/// Arithmetic procedures over real and complex numbers: `+ - * / ^`.
pub mod arithmetic;
/// Real-only transcendental procedures: `ln sin cos tan`.
pub mod builtin;
/// Accessors for complex numbers: `real imag arg conj mag`.
pub mod complex;
/// List procedures: `list first rest length append join range`.
pub mod list;
/// The `sqrt` procedure.
///
/// Returns a complex result for negative reals.
pub mod sqrt;

pub mod core;
