use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::{core::EvalResult, utils::Numeric},
        value::{complex::ComplexNumber, expression::Expression},
    },
};

fn arity_mismatch(procedure: &str) -> SemanticError {
    SemanticError::ArgumentCountMismatch { procedure: procedure.to_string() }
}

/// Folds every argument with a real and a complex operator.
///
/// Stays real while every operand is real; one complex operand promotes the
/// whole fold to complex.
fn fold(args: &[Expression],
        procedure: &str,
        identity: f64,
        real_op: fn(f64, f64) -> f64,
        complex_op: fn(ComplexNumber, ComplexNumber) -> ComplexNumber)
        -> EvalResult<Expression> {
    let values = args.iter()
                     .map(|arg| Numeric::from_arg(arg, procedure))
                     .collect::<EvalResult<Vec<_>>>()?;

    if let Some(reals) = values.iter()
                               .map(|v| v.as_real())
                               .collect::<Option<Vec<_>>>()
    {
        return Ok(reals.into_iter().fold(identity, real_op).into());
    }

    Ok(values.into_iter()
             .map(Numeric::to_complex)
             .fold(ComplexNumber::from(identity), complex_op)
             .into())
}

/// Applies a binary operator with real/complex promotion.
fn binary(left: &Expression,
          right: &Expression,
          procedure: &str,
          real_op: fn(f64, f64) -> f64,
          complex_op: fn(ComplexNumber, ComplexNumber) -> ComplexNumber)
          -> EvalResult<Expression> {
    match (Numeric::from_arg(left, procedure)?, Numeric::from_arg(right, procedure)?) {
        (Numeric::Real(l), Numeric::Real(r)) => Ok(real_op(l, r).into()),
        (l, r) => Ok(complex_op(l.to_complex(), r.to_complex()).into()),
    }
}

/// Sums all arguments. The empty sum is `0`.
///
/// # Example
/// ```
/// use plotscript::interpreter::{
///     evaluator::function::arithmetic::add,
///     value::{complex::ComplexNumber, expression::Expression},
/// };
///
/// let args: Vec<Expression> = (1..=6).map(|n| f64::from(n).into()).collect();
/// assert_eq!(add(&args).unwrap(), Expression::from(21.0));
///
/// let mixed = add(&[1.0.into(), ComplexNumber::new(0.0, 1.0).into()]).unwrap();
/// assert_eq!(mixed, Expression::from(ComplexNumber::new(1.0, 1.0)));
/// ```
pub fn add(args: &[Expression]) -> EvalResult<Expression> {
    fold(args, "+", 0.0, |l, r| l + r, |l, r| l + r)
}

/// Multiplies all arguments. The empty product is `1`; a single factor is
/// rejected by the arity check.
///
/// # Example
/// ```
/// use plotscript::interpreter::{evaluator::function::arithmetic::mul, value::expression::Expression};
///
/// assert_eq!(mul(&[]).unwrap(), Expression::from(1.0));
/// assert_eq!(mul(&[2.0.into(), 3.0.into(), 4.0.into()]).unwrap(), Expression::from(24.0));
/// ```
pub fn mul(args: &[Expression]) -> EvalResult<Expression> {
    fold(args, "*", 1.0, |l, r| l * r, |l, r| l * r)
}

/// Negates a single argument or subtracts the second from the first.
///
/// # Example
/// ```
/// use plotscript::interpreter::{evaluator::function::arithmetic::sub, value::expression::Expression};
///
/// assert_eq!(sub(&[4.0.into()]).unwrap(), Expression::from(-4.0));
/// assert_eq!(sub(&[4.0.into(), 1.0.into()]).unwrap(), Expression::from(3.0));
/// ```
pub fn sub(args: &[Expression]) -> EvalResult<Expression> {
    match args {
        [x] => match Numeric::from_arg(x, "-")? {
            Numeric::Real(r) => Ok((-r).into()),
            Numeric::Complex(c) => Ok((-c).into()),
        },
        [l, r] => binary(l, r, "-", |l, r| l - r, |l, r| l - r),
        _ => Err(arity_mismatch("-")),
    }
}

/// Inverts a single argument or divides the first by the second.
///
/// Division by zero follows IEEE semantics and yields an infinity or NaN
/// rather than a fault.
///
/// # Example
/// ```
/// use plotscript::interpreter::{evaluator::function::arithmetic::div, value::expression::Expression};
///
/// assert_eq!(div(&[4.0.into()]).unwrap(), Expression::from(0.25));
/// assert_eq!(div(&[(-1.0).into(), 1.0.into()]).unwrap(), Expression::from(-1.0));
/// ```
pub fn div(args: &[Expression]) -> EvalResult<Expression> {
    match args {
        [x] => match Numeric::from_arg(x, "/")? {
            Numeric::Real(r) => Ok(r.recip().into()),
            Numeric::Complex(c) => Ok(c.recip().into()),
        },
        [l, r] => binary(l, r, "/", |l, r| l / r, |l, r| l / r),
        _ => Err(arity_mismatch("/")),
    }
}

/// Raises the first argument to the power of the second.
///
/// All four combinations of real and complex base and exponent are
/// supported.
///
/// # Example
/// ```
/// use plotscript::interpreter::{
///     evaluator::function::arithmetic::pow,
///     value::{complex::ComplexNumber, expression::Expression},
/// };
///
/// assert_eq!(pow(&[2.0.into(), 10.0.into()]).unwrap(), Expression::from(1024.0));
///
/// let i = ComplexNumber::new(0.0, 1.0);
/// assert_eq!(pow(&[i.into(), 2.0.into()]).unwrap(),
///            Expression::from(ComplexNumber::new(-1.0, 0.0)));
/// ```
pub fn pow(args: &[Expression]) -> EvalResult<Expression> {
    match args {
        [base, exponent] => binary(base, exponent, "^", f64::powf, ComplexNumber::powc),
        _ => Err(arity_mismatch("^")),
    }
}
