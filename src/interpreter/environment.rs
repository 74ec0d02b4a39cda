use std::{
    collections::HashMap,
    f64::consts::{E, PI},
    sync::Arc,
};

use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::{
            core::{EvalResult, is_special_form},
            function::core::{BUILTIN_TABLE, BuiltinDef},
        },
        value::{atom::Atom, complex::I, expression::Expression},
    },
};

/// What a symbol denotes in the environment.
///
/// Values are shared behind an `Arc` so that cloning an environment (done on
/// every lambda call) copies pointers rather than whole expression trees.
#[derive(Debug, Clone)]
pub enum Binding {
    /// A value bound with `define`, a lambda parameter or a constant.
    Value(Arc<Expression>),
    /// A builtin procedure.
    Procedure(&'static BuiltinDef),
}

/// A flat symbol table mapping names to values or builtin procedures.
///
/// There is no nesting: a lambda call evaluates its body in a private clone
/// of the caller's environment with the parameters bound on top, so the body
/// sees every binding visible at the call site and its own definitions vanish
/// when the call returns.
///
/// ## Usage
///
/// ```
/// use plotscript::interpreter::environment::Environment;
///
/// let env = Environment::new();
/// assert!(env.is_procedure("+"));
/// assert!(env.is_value("pi"));
/// assert!(!env.is_known("r"));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment seeded with the default constants and builtin
    /// procedures.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Self { bindings: HashMap::new() };
        env.reset();
        env
    }

    /// Removes every user binding and restores exactly the default set:
    /// the constants `pi`, `-pi`, `e`, `-e`, `I`, `-I` and every builtin
    /// procedure.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::{environment::Environment, value::expression::Expression};
    ///
    /// let mut env = Environment::new();
    /// env.define("r", Expression::from(10.0)).unwrap();
    /// env.reset();
    /// assert!(!env.is_known("r"));
    /// assert!(env.is_known("sqrt"));
    /// ```
    pub fn reset(&mut self) {
        self.bindings.clear();

        let constants: [(&str, Expression); 6] = [("pi", PI.into()),
                                                  ("-pi", (-PI).into()),
                                                  ("e", E.into()),
                                                  ("-e", (-E).into()),
                                                  ("I", I.into()),
                                                  ("-I", (-I).into())];
        for (name, value) in constants {
            self.bindings
                .insert(name.to_string(), Binding::Value(Arc::new(value)));
        }

        for builtin in BUILTIN_TABLE {
            self.bindings
                .insert(builtin.name.to_string(), Binding::Procedure(builtin));
        }
    }

    /// Returns `true` if `name` has any binding.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Returns `true` if `name` is bound to a value.
    #[must_use]
    pub fn is_value(&self, name: &str) -> bool {
        matches!(self.bindings.get(name), Some(Binding::Value(_)))
    }

    /// Returns `true` if `name` is bound to a builtin procedure.
    #[must_use]
    pub fn is_procedure(&self, name: &str) -> bool {
        matches!(self.bindings.get(name), Some(Binding::Procedure(_)))
    }

    /// The value bound to `name`, if any.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&Expression> {
        match self.bindings.get(name) {
            Some(Binding::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// The builtin procedure bound to `name`, if any.
    #[must_use]
    pub fn get_procedure(&self, name: &str) -> Option<&'static BuiltinDef> {
        match self.bindings.get(name) {
            Some(Binding::Procedure(def)) => Some(*def),
            _ => None,
        }
    }

    /// Binds `symbol` to `value`, replacing any previous binding.
    ///
    /// This is the unchecked primitive used for lambda parameters, which may
    /// shadow outer values inside the call's private environment.
    ///
    /// # Errors
    /// `NonSymbolBinding` if `symbol` is not a symbol atom.
    pub fn bind(&mut self, symbol: &Atom, value: Expression) -> EvalResult<()> {
        let name = symbol.as_symbol().ok_or(SemanticError::NonSymbolBinding)?;
        self.bindings
            .insert(name.to_string(), Binding::Value(Arc::new(value)));
        Ok(())
    }

    /// Adds a new value binding, refusing to touch protected names.
    ///
    /// # Errors
    /// - `SpecialFormRedefinition` for a special-form keyword.
    /// - `BuiltinRedefinition` for a builtin procedure name.
    /// - `SymbolRedefinition` if `name` is already bound to a value.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::{environment::Environment, value::expression::Expression};
    ///
    /// let mut env = Environment::new();
    /// assert!(env.define("answer", Expression::from(42.0)).is_ok());
    /// assert!(env.define("answer", Expression::from(43.0)).is_err());
    /// assert!(env.define("pi", Expression::from(3.14)).is_err());
    /// assert!(env.define("sqrt", Expression::from(1.0)).is_err());
    /// assert!(env.define("begin", Expression::from(1.0)).is_err());
    /// ```
    pub fn define(&mut self, name: &str, value: Expression) -> EvalResult<()> {
        check_definable(self, name)?;
        self.bindings
            .insert(name.to_string(), Binding::Value(Arc::new(value)));
        Ok(())
    }
}

/// Ensures that `name` may receive a new binding.
///
/// A name is rejected if it is a special-form keyword, a builtin procedure,
/// or already bound to a value.
pub fn check_definable(env: &Environment, name: &str) -> EvalResult<()> {
    if is_special_form(name) {
        return Err(SemanticError::SpecialFormRedefinition { name: name.to_string() });
    }
    if env.is_procedure(name) {
        return Err(SemanticError::BuiltinRedefinition { name: name.to_string() });
    }
    if env.is_value(name) {
        return Err(SemanticError::SymbolRedefinition { name: name.to_string() });
    }
    Ok(())
}
