use log::trace;

use crate::{
    error::SemanticError,
    interpreter::{
        environment::{Environment, check_definable},
        evaluator::{
            function::core::{BuiltinDef, is_builtin},
            utils::check_arity,
        },
        value::{
            atom::Atom,
            expression::{Expression, LAMBDA},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `SemanticError` describing the fault.
pub type EvalResult<T> = Result<T, SemanticError>;

/// Head symbols interpreted by the evaluator itself rather than looked up in
/// the environment. None of them may be rebound.
pub const SPECIAL_FORMS: &[&str] = &["begin",
                                     "define",
                                     "lambda",
                                     "apply",
                                     "map",
                                     "set-property",
                                     "get-property",
                                     "discrete-plot",
                                     "continuous-plot"];

/// Returns `true` if `name` is a special-form keyword.
#[must_use]
pub fn is_special_form(name: &str) -> bool {
    SPECIAL_FORMS.contains(&name)
}

/// Something that can be invoked with already evaluated arguments: a builtin
/// procedure or a lambda value.
#[derive(Debug, Clone)]
pub enum Callable {
    Builtin(&'static BuiltinDef),
    Lambda(Expression),
}

impl Callable {
    /// Resolves the first argument of `apply`, `map` or `continuous-plot`.
    ///
    /// The node must be a bare symbol, with no arguments of its own, naming a
    /// builtin procedure or a symbol bound to a lambda value.
    ///
    /// # Errors
    /// - `ExpectedSymbol` if the node is not a bare symbol.
    /// - `NotAProcedure` if the symbol names neither.
    pub fn resolve(node: &Expression, env: &Environment, form: &str) -> EvalResult<Self> {
        let name = match node.head().as_symbol() {
            Some(name) if node.is_leaf() => name,
            _ => return Err(SemanticError::ExpectedSymbol { form: form.to_string() }),
        };

        if let Some(def) = env.get_procedure(name) {
            return Ok(Self::Builtin(def));
        }
        match env.get_value(name) {
            Some(value) if value.is_lambda() => Ok(Self::Lambda(value.clone())),
            _ => Err(SemanticError::NotAProcedure { name: name.to_string() }),
        }
    }

    /// Number of parameters of a lambda; `None` for builtins, which check
    /// their own arity.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Builtin(_) => None,
            Self::Lambda(lambda) => lambda.tail().first().map(|params| params.tail().len()),
        }
    }

    /// Returns `true` if the callable can receive `n` arguments.
    #[must_use]
    pub fn accepts(&self, n: usize) -> bool {
        match self {
            Self::Builtin(def) => def.arity.check(n),
            Self::Lambda(_) => self.arity() == Some(n),
        }
    }

    /// Invokes the callable. Arguments are used as given and are not
    /// evaluated again.
    ///
    /// # Errors
    /// Any fault raised by the builtin or the lambda body.
    pub fn call(&self, args: &[Expression], env: &Environment) -> EvalResult<Expression> {
        match self {
            Self::Builtin(def) => def.call(args),
            Self::Lambda(lambda) => call_lambda(lambda, args, env),
        }
    }
}

/// Evaluates a lambda body in a private copy of `env`.
///
/// Each parameter is bound to the corresponding argument on top of the
/// caller's bindings; definitions made by the body are discarded with the
/// copy.
///
/// # Errors
/// `ArgumentCountMismatch` if the argument count differs from the parameter
/// count, or any fault raised by the body.
pub fn call_lambda(lambda: &Expression, args: &[Expression], env: &Environment) -> EvalResult<Expression> {
    let [params, body] = lambda.tail() else {
        return Err(SemanticError::NotAProcedure { name: lambda.to_string() });
    };
    if params.tail().len() != args.len() {
        return Err(SemanticError::ArgumentCountMismatch { procedure: LAMBDA.to_string() });
    }

    let mut scope = env.clone();
    for (param, arg) in params.tail().iter().zip(args) {
        scope.bind(param.head(), arg.clone())?;
    }

    let mut body = body.clone();
    body.eval(&mut scope)
}

impl Expression {
    /// Evaluates the expression against `env`.
    ///
    /// Dispatch follows the head atom:
    /// 1. A leaf (other than `list`) is looked up: numbers, complex numbers
    ///    and string literals evaluate to themselves, symbols to their bound
    ///    value.
    /// 2. A special-form keyword is handled by its form.
    /// 3. Otherwise the head names a bound lambda or a builtin procedure,
    ///    whose arguments are evaluated left to right and passed in.
    ///
    /// The receiver is mutable because `set-property` also decorates the
    /// node it evaluates.
    ///
    /// # Errors
    /// A [`SemanticError`] for any fault. Bindings made before the fault
    /// remain in `env`.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::{
    ///     environment::Environment,
    ///     parser::core::parse_source,
    ///     value::expression::Expression,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let mut ast = parse_source("(begin (define a 1) (+ a 2))").unwrap();
    /// assert_eq!(ast.eval(&mut env).unwrap(), Expression::from(3.0));
    /// assert!(env.is_value("a"));
    /// ```
    pub fn eval(&mut self, env: &mut Environment) -> EvalResult<Self> {
        if self.is_leaf() && !self.is_list() {
            return self.eval_lookup(env);
        }

        if !self.head().is_symbol() {
            return Err(SemanticError::NotAProcedure { name: self.head().to_string() });
        }
        let form = SPECIAL_FORMS.iter()
                                .find(|form| self.head().is_symbol_named(form))
                                .copied();

        match form {
            Some("begin") => self.eval_begin(env),
            Some("define") => self.eval_define(env),
            Some("lambda") => self.eval_lambda(),
            Some("apply") => self.eval_apply(env),
            Some("map") => self.eval_map(env),
            Some("set-property") => self.eval_set_property(env),
            Some("get-property") => self.eval_get_property(env),
            Some("discrete-plot") => self.eval_discrete_plot(env),
            Some("continuous-plot") => self.eval_continuous_plot(env),
            _ => self.eval_application(env),
        }
    }

    /// Evaluates a terminal expression.
    fn eval_lookup(&self, env: &Environment) -> EvalResult<Self> {
        match self.head() {
            Atom::Number(_) | Atom::Complex(_) | Atom::StringLiteral(_) => {
                Ok(Self::new(self.head().clone()))
            },
            Atom::Symbol(name) => env.get_value(name)
                                     .cloned()
                                     .ok_or_else(|| SemanticError::UnknownSymbol { name: name.clone() }),
            Atom::None => Err(SemanticError::InvalidTerminal),
        }
    }

    /// Evaluates every child in order and returns the last result.
    fn eval_begin(&mut self, env: &mut Environment) -> EvalResult<Self> {
        if self.tail().is_empty() {
            return Err(SemanticError::ArgumentCountMismatch { procedure: "begin".to_string() });
        }

        let mut result = Self::none();
        for child in self.tail_mut() {
            result = child.eval(env)?;
        }
        Ok(result)
    }

    /// Binds a new symbol to the value of its second child.
    ///
    /// The name is validated before the value is evaluated.
    fn eval_define(&mut self, env: &mut Environment) -> EvalResult<Self> {
        check_arity(self.tail(), 2, "define")?;

        let name = match self.tail()[0].head().as_symbol() {
            Some(name) if self.tail()[0].is_leaf() => name.to_string(),
            _ => return Err(SemanticError::ExpectedSymbol { form: "define".to_string() }),
        };
        check_definable(env, &name)?;

        let value = self.tail_mut()[1].eval(env)?;
        trace!("define `{name}`");
        env.define(&name, value.clone())?;
        Ok(value)
    }

    /// Builds a lambda value from a parameter form and a body.
    ///
    /// The body is stored unevaluated. Evaluating a lambda value again yields
    /// an equal lambda.
    fn eval_lambda(&self) -> EvalResult<Self> {
        check_arity(self.tail(), 2, LAMBDA)?;
        let [params, body] = self.tail() else {
            return Err(SemanticError::ArgumentCountMismatch { procedure: LAMBDA.to_string() });
        };

        let mut names = Vec::with_capacity(params.tail().len() + 1);
        if !params.head().is_symbol() {
            return Err(SemanticError::ExpectedSymbol { form: LAMBDA.to_string() });
        }
        // `(list x y)` is the parameter form of an already built lambda value.
        if !params.is_list() {
            names.push(params.head().clone());
        }
        for param in params.tail() {
            if !(param.head().is_symbol() && param.is_leaf()) {
                return Err(SemanticError::ExpectedSymbol { form: LAMBDA.to_string() });
            }
            names.push(param.head().clone());
        }

        if let Some(shadowed) = names.iter()
                                     .filter_map(Atom::as_symbol)
                                     .find(|name| is_builtin(name))
        {
            return Err(SemanticError::BuiltinRedefinition { name: shadowed.to_string() });
        }

        let params = Self::list(names.into_iter().map(Self::new).collect());
        Ok(Self::with_tail(Atom::symbol(LAMBDA), vec![params, body.clone()]))
    }

    /// Calls a bound lambda or a builtin procedure named by the head.
    ///
    /// Arguments are evaluated left to right in the caller's environment.
    fn eval_application(&mut self, env: &mut Environment) -> EvalResult<Self> {
        let name = self.head().to_string();

        let mut args = Vec::with_capacity(self.tail().len());
        let target = if let Some(value) = env.get_value(&name)
                        && value.is_lambda()
        {
            Callable::Lambda(value.clone())
        } else if let Some(def) = env.get_procedure(&name) {
            Callable::Builtin(def)
        } else {
            return Err(SemanticError::NotAProcedure { name });
        };

        for child in self.tail_mut() {
            args.push(child.eval(env)?);
        }
        target.call(&args, env)
    }
}
