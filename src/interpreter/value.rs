/// Terminal values.
///
/// Defines the `Atom` sum type: none, real number, complex number, symbol and
/// string literal, with epsilon-tolerant numeric equality.
pub mod atom;
/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts, including powers, roots, logarithms and the phase angle.
pub mod complex;
/// Expression trees.
///
/// Defines `Expression`, the head-plus-tail tree that serves both as parsed
/// syntax and as runtime value, together with its property map and canonical
/// rendering.
pub mod expression;
