use std::{fmt::Display, ops};

use crate::util::num::approx_eq;

/// The multiplicative identity.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// The imaginary unit, bound to `I` in every fresh environment.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

const ORIGIN: ComplexNumber = ComplexNumber::new(0.0, 0.0);

/// A complex number in rectangular form.
///
/// Values are plain `Copy` pairs; every operation returns a new number.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    pub real:      f64,
    pub imaginary: f64,
}

/// Renders as `real,imaginary`, e.g. `0,1` for `I`.
///
/// This form is for display only. The tokenizer reads `0,1` as an invalid
/// atom, so complex values never round-trip through the parser.
impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.real, self.imaginary)
    }
}

impl ComplexNumber {
    /// Builds `real + imaginary * i`.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::value::complex::{ComplexNumber, I};
    ///
    /// assert_eq!(ComplexNumber::new(0.0, 1.0), I);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    const fn is_origin(self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Distance from the origin.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Mirror image across the real axis.
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// `1 / z`. The reciprocal of zero has non-finite parts.
    #[must_use]
    pub fn recip(&self) -> Self {
        ONE / *self
    }

    /// Phase angle in radians, in `(-pi, pi]`.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::value::complex::ComplexNumber;
    ///
    /// let west = ComplexNumber::new(-2.0, 0.0);
    /// assert_eq!(west.arg(), std::f64::consts::PI);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// `self` raised to `exponent`, computed as `exp(exponent * ln(self))`
    /// on the principal branch.
    ///
    /// A zero base gives one for a zero exponent and zero for an exponent
    /// with positive real part.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::value::complex::{ComplexNumber, I};
    ///
    /// let squared = I.powc(ComplexNumber::new(2.0, 0.0));
    /// assert!((squared.real + 1.0).abs() < 1e-12);
    /// assert!(squared.imaginary.abs() < 1e-12);
    ///
    /// assert_eq!(ComplexNumber::new(0.0, 0.0).powc(ComplexNumber::new(0.0, 0.0)),
    ///            ComplexNumber::new(1.0, 0.0));
    /// ```
    #[must_use]
    pub fn powc(self, exponent: Self) -> Self {
        if self.is_origin() {
            if exponent.is_origin() {
                return ONE;
            }
            if exponent.real > 0.0 {
                return ORIGIN;
            }
        }
        (exponent * self.ln()).exp()
    }

    /// Principal square root: the root with non-negative real part, whose
    /// imaginary part carries the sign of `self.imaginary`.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::value::complex::ComplexNumber;
    ///
    /// let root = ComplexNumber::new(3.0, 4.0).sqrt();
    /// assert_eq!(root, ComplexNumber::new(2.0, 1.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let modulus = self.abs();
        Self::new(f64::midpoint(modulus, self.real).sqrt(),
                  ((modulus - self.real) / 2.0).sqrt()
                                               .copysign(self.imaginary))
    }

    /// `e` raised to `self`.
    #[must_use]
    pub fn exp(self) -> Self {
        let scale = self.real.exp();
        let (sin, cos) = self.imaginary.sin_cos();
        Self::new(scale * cos, scale * sin)
    }

    /// Natural logarithm on the principal branch.
    #[must_use]
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.real.mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
                  self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real))
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    /// Multiplies by the conjugate of `rhs` and scales by its squared
    /// modulus.
    fn div(self, rhs: Self) -> Self {
        let norm = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        let numerator = self * rhs.conj();
        Self::new(numerator.real / norm, numerator.imaginary / norm)
    }
}

impl<T> From<T> for ComplexNumber where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self::new(value.into(), 0.0)
    }
}

/// Equal when the two numbers lie within machine epsilon of each other.
impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        approx_eq((*self - *other).abs(), 0.0)
    }
}
