use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::{core::EvalResult, utils::Numeric},
        value::{complex::ComplexNumber, expression::Expression},
    },
};

/// Computes square roots of numeric values.
///
/// - Nonnegative reals return a real square root.
/// - Negative reals return a purely imaginary complex result.
/// - Complex values use their principal complex square root.
///
/// Non-numeric inputs produce an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use plotscript::interpreter::{
///     evaluator::function::sqrt::sqrt,
///     value::{complex::I, expression::Expression},
/// };
///
/// assert_eq!(sqrt(&[9.0.into()]).unwrap(), Expression::from(3.0));
/// assert_eq!(sqrt(&[(-1.0).into()]).unwrap(), Expression::from(I));
/// ```
pub fn sqrt(args: &[Expression]) -> EvalResult<Expression> {
    let [x] = args else {
        return Err(SemanticError::ArgumentCountMismatch { procedure: "sqrt".to_string() });
    };

    match Numeric::from_arg(x, "sqrt")? {
        Numeric::Real(r) if r >= 0.0 => Ok(r.sqrt().into()),
        Numeric::Real(r) => Ok(ComplexNumber { real:      0.0,
                                               imaginary: (-r).sqrt(), }.into()),
        Numeric::Complex(c) => Ok(c.sqrt().into()),
    }
}
