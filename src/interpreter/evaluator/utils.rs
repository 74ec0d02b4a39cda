use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{atom::Atom, complex::ComplexNumber, expression::Expression},
    },
};

/// A numeric argument: either real or complex.
///
/// Arithmetic promotes to complex as soon as one operand is complex and
/// stays real otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Real(f64),
    Complex(ComplexNumber),
}

impl Numeric {
    /// Extracts a number from an evaluated argument.
    ///
    /// # Errors
    /// `ExpectedNumber` naming `procedure` if the argument is not a real or
    /// complex number.
    pub fn from_arg(arg: &Expression, procedure: &str) -> EvalResult<Self> {
        match arg.head() {
            Atom::Number(n) if arg.is_leaf() => Ok(Self::Real(*n)),
            Atom::Complex(c) if arg.is_leaf() => Ok(Self::Complex(*c)),
            _ => Err(SemanticError::ExpectedNumber { procedure: procedure.to_string() }),
        }
    }

    /// The value as a complex number.
    #[must_use]
    pub fn to_complex(self) -> ComplexNumber {
        match self {
            Self::Real(r) => ComplexNumber::from(r),
            Self::Complex(c) => c,
        }
    }

    /// The value as a real number, if it is one.
    #[must_use]
    pub const fn as_real(self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(r),
            Self::Complex(_) => None,
        }
    }
}

impl From<Numeric> for Expression {
    fn from(n: Numeric) -> Self {
        match n {
            Numeric::Real(r) => r.into(),
            Numeric::Complex(c) => c.into(),
        }
    }
}

/// Extracts a real number from an evaluated argument.
///
/// # Errors
/// `ExpectedNumber` if the argument is not a real number.
pub fn expect_number(arg: &Expression, procedure: &str) -> EvalResult<f64> {
    match Numeric::from_arg(arg, procedure)? {
        Numeric::Real(r) => Ok(r),
        Numeric::Complex(_) => Err(SemanticError::ExpectedNumber { procedure: procedure.to_string() }),
    }
}

/// Extracts a complex number from an evaluated argument.
///
/// # Errors
/// `ExpectedComplex` if the argument is not a complex number.
pub fn expect_complex(arg: &Expression, procedure: &str) -> EvalResult<ComplexNumber> {
    match arg.head() {
        Atom::Complex(c) if arg.is_leaf() => Ok(*c),
        _ => Err(SemanticError::ExpectedComplex { procedure: procedure.to_string() }),
    }
}

/// Returns the elements of a list value.
///
/// # Errors
/// `ExpectedList` if the argument is not a list.
pub fn expect_list<'a>(arg: &'a Expression, procedure: &str) -> EvalResult<&'a [Expression]> {
    if arg.is_list() {
        Ok(arg.tail())
    } else {
        Err(SemanticError::ExpectedList { procedure: procedure.to_string() })
    }
}

/// Returns the text of a leaf string literal.
///
/// # Errors
/// `ExpectedStringLiteral` naming `form` otherwise.
pub fn expect_string_literal<'a>(arg: &'a Expression, form: &str) -> EvalResult<&'a str> {
    match arg.head().as_string_literal() {
        Some(text) if arg.is_leaf() => Ok(text),
        _ => Err(SemanticError::ExpectedStringLiteral { form: form.to_string() }),
    }
}

/// Ensures a special form received exactly `expected` children.
///
/// # Errors
/// `ArgumentCountMismatch` naming `form`.
pub fn check_arity<T>(args: &[T], expected: usize, form: &str) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(SemanticError::ArgumentCountMismatch { procedure: form.to_string() })
    }
}
