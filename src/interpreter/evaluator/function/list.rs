use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{expect_list, expect_number},
        },
        value::expression::Expression,
    },
    util::num::usize_to_f64_checked,
};

fn arity_mismatch(procedure: &str) -> SemanticError {
    SemanticError::ArgumentCountMismatch { procedure: procedure.to_string() }
}

fn empty_list(procedure: &str) -> SemanticError {
    SemanticError::EmptyList { procedure: procedure.to_string() }
}

/// Builds a list from its arguments, in order.
///
/// # Example
/// ```
/// use plotscript::interpreter::{evaluator::function::list::list, value::expression::Expression};
///
/// let l = list(&[1.0.into(), 2.0.into()]).unwrap();
/// assert_eq!(l, Expression::list(vec![1.0.into(), 2.0.into()]));
/// assert!(list(&[]).unwrap().tail().is_empty());
/// ```
pub fn list(args: &[Expression]) -> EvalResult<Expression> {
    Ok(Expression::list(args.to_vec()))
}

/// Returns the first element of a non-empty list.
pub fn first(args: &[Expression]) -> EvalResult<Expression> {
    let [l] = args else {
        return Err(arity_mismatch("first"));
    };
    expect_list(l, "first")?.first()
                            .cloned()
                            .ok_or_else(|| empty_list("first"))
}

/// Returns every element of a list except the first.
///
/// The list must have at least two elements, so that the rest is never
/// empty.
///
/// # Example
/// ```
/// use plotscript::interpreter::{evaluator::function::list::rest, value::expression::Expression};
///
/// let l = Expression::list(vec![1.0.into(), 2.0.into(), 3.0.into()]);
/// assert_eq!(rest(&[l]).unwrap(), Expression::list(vec![2.0.into(), 3.0.into()]));
///
/// assert!(rest(&[Expression::list(vec![1.0.into()])]).is_err());
/// assert!(rest(&[Expression::list(vec![])]).is_err());
/// ```
pub fn rest(args: &[Expression]) -> EvalResult<Expression> {
    let [l] = args else {
        return Err(arity_mismatch("rest"));
    };
    match expect_list(l, "rest")? {
        [] | [_] => Err(empty_list("rest")),
        [_, tail @ ..] => Ok(Expression::list(tail.to_vec())),
    }
}

/// Returns the number of elements in a list.
pub fn length(args: &[Expression]) -> EvalResult<Expression> {
    let [l] = args else {
        return Err(arity_mismatch("length"));
    };
    let len = expect_list(l, "length")?.len();
    Ok(usize_to_f64_checked(len, "length")?.into())
}

/// Returns a new list with the second argument added at the end.
pub fn append(args: &[Expression]) -> EvalResult<Expression> {
    let [l, item] = args else {
        return Err(arity_mismatch("append"));
    };
    let mut items = expect_list(l, "append")?.to_vec();
    items.push(item.clone());
    Ok(Expression::list(items))
}

/// Concatenates two lists.
pub fn join(args: &[Expression]) -> EvalResult<Expression> {
    let [l, r] = args else {
        return Err(arity_mismatch("join"));
    };
    let mut items = expect_list(l, "join")?.to_vec();
    items.extend_from_slice(expect_list(r, "join")?);
    Ok(Expression::list(items))
}

/// Samples from `begin` to `end` inclusive in steps of `increment`.
///
/// The k-th element is `begin + k * increment`, which avoids accumulating
/// rounding error over long ranges.
///
/// # Errors
/// - `ExpectedNumber` unless all three arguments are real numbers.
/// - `DomainError` if `begin > end`, `increment <= 0` or any argument is
///   not finite.
///
/// # Example
/// ```
/// use plotscript::interpreter::{evaluator::function::list::range, value::expression::Expression};
///
/// let r = range(&[0.0.into(), 1.0.into(), 0.5.into()]).unwrap();
/// assert_eq!(r, Expression::list(vec![0.0.into(), 0.5.into(), 1.0.into()]));
///
/// assert!(range(&[1.0.into(), 0.0.into(), 1.0.into()]).is_err());
/// assert!(range(&[0.0.into(), 1.0.into(), 0.0.into()]).is_err());
/// ```
pub fn range(args: &[Expression]) -> EvalResult<Expression> {
    let [begin, end, increment] = args else {
        return Err(arity_mismatch("range"));
    };
    let begin = expect_number(begin, "range")?;
    let end = expect_number(end, "range")?;
    let increment = expect_number(increment, "range")?;

    if !(begin.is_finite() && end.is_finite() && increment.is_finite()) {
        return Err(SemanticError::DomainError { procedure: "range".to_string(),
                                                details:   "bounds and increment must be finite".to_string(), });
    }
    if begin > end {
        return Err(SemanticError::DomainError { procedure: "range".to_string(),
                                                details:   "begin greater than end".to_string(), });
    }
    if increment <= 0.0 {
        return Err(SemanticError::DomainError { procedure: "range".to_string(),
                                                details:   "negative or zero increment".to_string(), });
    }

    let mut items = Vec::new();
    let mut step = 0.0_f64;
    loop {
        let value = step.mul_add(increment, begin);
        if value > end {
            break;
        }
        items.push(value.into());
        step += 1.0;
    }
    Ok(Expression::list(items))
}
