use log::trace;

use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{arithmetic, builtin, complex, list, sqrt},
        },
        value::expression::Expression,
    },
};

/// Type alias for builtin procedure handlers.
///
/// A builtin receives a slice of already evaluated arguments and returns a
/// freshly built expression. It never sees the environment.
pub type BuiltinFn = fn(&[Expression]) -> EvalResult<Expression>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin is variadic with `n` or more arguments.
/// - `AnyBut(n)` means the builtin accepts every count except `n`.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
    AnyBut(usize),
}

/// Defines builtin procedures by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table seeded into every environment),
/// - `BUILTIN_PROCEDURES` (public list of builtin names).
macro_rules! builtin_procedures {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_PROCEDURES: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_procedures! {
    "+"      => { arity: Arity::AtLeast(0), func: arithmetic::add },
    "-"      => { arity: Arity::OneOf(&[1, 2]), func: arithmetic::sub },
    "*"      => { arity: Arity::AnyBut(1), func: arithmetic::mul },
    "/"      => { arity: Arity::OneOf(&[1, 2]), func: arithmetic::div },
    "^"      => { arity: Arity::Exact(2), func: arithmetic::pow },
    "sqrt"   => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "ln"     => { arity: Arity::Exact(1), func: builtin::ln },
    "sin"    => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"    => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"    => { arity: Arity::Exact(1), func: builtin::tan },
    "real"   => { arity: Arity::Exact(1), func: complex::real },
    "imag"   => { arity: Arity::Exact(1), func: complex::imag },
    "arg"    => { arity: Arity::Exact(1), func: complex::arg },
    "conj"   => { arity: Arity::Exact(1), func: complex::conj },
    "mag"    => { arity: Arity::Exact(1), func: complex::mag },
    "list"   => { arity: Arity::AtLeast(0), func: list::list },
    "first"  => { arity: Arity::Exact(1), func: list::first },
    "rest"   => { arity: Arity::Exact(1), func: list::rest },
    "length" => { arity: Arity::Exact(1), func: list::length },
    "append" => { arity: Arity::Exact(2), func: list::append },
    "join"   => { arity: Arity::Exact(2), func: list::join },
    "range"  => { arity: Arity::Exact(3), func: list::range },
}

/// Metadata for one builtin procedure.
#[derive(Debug)]
pub struct BuiltinDef {
    pub name:  &'static str,
    pub arity: Arity,
    pub func:  BuiltinFn,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
            Self::AnyBut(m) => n != *m,
        }
    }
}

impl BuiltinDef {
    /// Invokes the builtin after verifying the argument count.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` naming the procedure if the arity check fails,
    /// otherwise whatever the builtin itself reports.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::{
    ///     evaluator::function::core::lookup_builtin,
    ///     value::expression::Expression,
    /// };
    ///
    /// let add = lookup_builtin("+").unwrap();
    /// let sum = add.call(&[1.0.into(), 2.0.into()]).unwrap();
    /// assert_eq!(sum, Expression::from(3.0));
    ///
    /// let first = lookup_builtin("first").unwrap();
    /// assert!(first.call(&[]).is_err());
    /// ```
    pub fn call(&self, args: &[Expression]) -> EvalResult<Expression> {
        if !self.arity.check(args.len()) {
            return Err(SemanticError::ArgumentCountMismatch { procedure: self.name.to_string() });
        }
        trace!("calling builtin `{}` with {} argument(s)", self.name, args.len());
        (self.func)(args)
    }
}

/// Finds the builtin named `name`.
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Returns `true` if `name` is a builtin procedure.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_PROCEDURES.contains(&name)
}
