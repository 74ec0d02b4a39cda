use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::{core::EvalResult, utils::expect_number},
        value::expression::Expression,
    },
};

/// Applies a unary real-valued builtin to a numeric value.
///
/// The generated functions accept exactly one real argument. Complex values,
/// symbols, strings and lists produce an `ExpectedNumber` error.
///
/// # Example
/// ```
/// use plotscript::interpreter::{evaluator::function::builtin::sin, value::expression::Expression};
///
/// let x = Expression::from(std::f64::consts::PI / 2.0);
/// let r = sin(&[x]).unwrap();
///
/// assert_eq!(r, Expression::from(1.0));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident, $name:literal) => {
        pub fn $fname(args: &[Expression]) -> EvalResult<Expression> {
            match args {
                [x] => Ok(expect_number(x, $name)?.$real_fn().into()),
                _ => Err(SemanticError::ArgumentCountMismatch { procedure: $name.to_string() }),
            }
        }
    };
}

real_builtin!(sin, sin, "sin");
real_builtin!(cos, cos, "cos");
real_builtin!(tan, tan, "tan");

/// Computes the natural logarithm of a positive real number.
///
/// # Errors
/// - `ExpectedNumber` for anything other than a real number.
/// - `DomainError` for zero or negative input.
///
/// # Example
/// ```
/// use plotscript::interpreter::{evaluator::function::builtin::ln, value::expression::Expression};
///
/// assert_eq!(ln(&[std::f64::consts::E.into()]).unwrap(), Expression::from(1.0));
/// assert!(ln(&[0.0.into()]).is_err());
/// assert!(ln(&[(-1.0).into()]).is_err());
/// ```
pub fn ln(args: &[Expression]) -> EvalResult<Expression> {
    let [x] = args else {
        return Err(SemanticError::ArgumentCountMismatch { procedure: "ln".to_string() });
    };
    let x = expect_number(x, "ln")?;

    if x <= 0.0 {
        return Err(SemanticError::DomainError { procedure: "ln".to_string(),
                                                details:   "argument must be positive".to_string(), });
    }
    Ok(x.ln().into())
}
