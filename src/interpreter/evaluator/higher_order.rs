use crate::{
    error::SemanticError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Callable, EvalResult},
            utils::{check_arity, expect_list},
        },
        value::expression::Expression,
    },
};

impl Expression {
    /// Evaluates `(apply PROC LIST)`.
    ///
    /// `PROC` must be a bare symbol naming a builtin procedure or a bound
    /// lambda; it is resolved before `LIST` is evaluated. The elements of the
    /// evaluated list become the arguments of a single call. A builtin
    /// receives them as they are; a lambda receives each element evaluated
    /// once more, which drops any properties attached to it.
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
    /// let mut ast = parse_source("(apply + (list 1 2 3 4))").unwrap();
    /// assert_eq!(ast.eval(&mut env).unwrap(), Expression::from(10.0));
    ///
    /// let mut bad = parse_source("(apply + 3)").unwrap();
    /// assert!(bad.eval(&mut env).is_err());
    /// ```
    pub(crate) fn eval_apply(&mut self, env: &mut Environment) -> EvalResult<Self> {
        check_arity(self.tail(), 2, "apply")?;

        let callable = Callable::resolve(&self.tail()[0], env, "apply")?;
        let list = self.tail_mut()[1].eval(env)?;
        let args = expect_list(&list, "apply")?;

        match &callable {
            Callable::Builtin(_) => callable.call(args, env),
            Callable::Lambda(_) => {
                let args = args.iter()
                               .map(|arg| arg.clone().eval(env))
                               .collect::<EvalResult<Vec<_>>>()?;
                callable.call(&args, env)
            },
        }
    }

    /// Evaluates `(map PROC LIST)`.
    ///
    /// `PROC` is called once per element, in order, and the results are
    /// collected into a new list. It must accept exactly one argument.
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
    /// let mut ast = parse_source("(map / (list 1 2 4))").unwrap();
    /// assert_eq!(ast.eval(&mut env).unwrap(),
    ///            Expression::list(vec![1.0.into(), 0.5.into(), 0.25.into()]));
    /// ```
    pub(crate) fn eval_map(&mut self, env: &mut Environment) -> EvalResult<Self> {
        check_arity(self.tail(), 2, "map")?;

        let list = self.tail_mut()[1].eval(env)?;
        let items = expect_list(&list, "map")?;

        let callable = Callable::resolve(&self.tail()[0], env, "map")?;
        if !callable.accepts(1) {
            return Err(SemanticError::ArgumentCountMismatch { procedure: "map".to_string() });
        }

        let mapped = items.iter()
                          .map(|item| callable.call(std::slice::from_ref(item), env))
                          .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self::list(mapped))
    }
}
