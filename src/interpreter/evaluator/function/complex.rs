use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::{core::EvalResult, utils::expect_complex},
        value::expression::Expression,
    },
};

/// Applies an accessor to a single complex argument.
///
/// Real numbers are rejected with `ExpectedComplex`; there is no implicit
/// promotion for these procedures.
///
/// # Example
/// ```
/// use plotscript::interpreter::{
///     evaluator::function::complex::{conj, imag, mag},
///     value::{complex::ComplexNumber, expression::Expression},
/// };
///
/// let z = Expression::from(ComplexNumber { real:      3.0,
///                                          imaginary: -4.0, });
///
/// assert_eq!(imag(&[z.clone()]).unwrap(), Expression::from(-4.0));
/// assert_eq!(mag(&[z.clone()]).unwrap(), Expression::from(5.0));
/// assert_eq!(conj(&[z]).unwrap(),
///            Expression::from(ComplexNumber { real:      3.0,
///                                             imaginary: 4.0, }));
/// assert!(mag(&[1.0.into()]).is_err());
/// ```
macro_rules! complex_accessor {
    ($fname:ident, $name:literal, |$c:ident| $body:expr) => {
        pub fn $fname(args: &[Expression]) -> EvalResult<Expression> {
            let [z] = args else {
                return Err(SemanticError::ArgumentCountMismatch { procedure: $name.to_string() });
            };
            let $c = expect_complex(z, $name)?;
            Ok(($body).into())
        }
    };
}

complex_accessor!(real, "real", |c| c.real);
complex_accessor!(imag, "imag", |c| c.imaginary);
complex_accessor!(arg, "arg", |c| c.arg());
complex_accessor!(conj, "conj", |c| c.conj());
complex_accessor!(mag, "mag", |c| c.abs());
