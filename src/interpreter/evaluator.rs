/// Core evaluation logic.
///
/// Contains the main dispatch over special forms and procedure calls, the
/// `EvalResult` alias and lambda invocation.
pub mod core;

/// Builtin procedure implementations and the table that registers them.
pub mod function;

/// The `apply` and `map` special forms.
pub mod higher_order;

/// The `discrete-plot` and `continuous-plot` special forms.
pub mod plot;

/// The `set-property` and `get-property` special forms.
pub mod property;

/// Argument extraction helpers shared by forms and procedures.
pub mod utils;
