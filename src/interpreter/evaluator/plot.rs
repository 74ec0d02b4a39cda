use crate::{
    error::SemanticError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Callable, EvalResult},
            utils::{check_arity, expect_list, expect_number},
        },
        plot::{PlotOptions, continuous_plot, coordinates, discrete_plot},
        value::expression::Expression,
    },
};

impl Expression {
    /// Evaluates `(discrete-plot DATA OPTIONS)`.
    ///
    /// `DATA` must evaluate to a list of `(list x y)` points and `OPTIONS` to
    /// a list of `(list "name" value)` pairs.
    pub(crate) fn eval_discrete_plot(&mut self, env: &mut Environment) -> EvalResult<Self> {
        const FORM: &str = "discrete-plot";
        check_arity(self.tail(), 2, FORM)?;

        let data = self.tail_mut()[0].eval(env)?;
        let options = self.tail_mut()[1].eval(env)?;

        let points = expect_list(&data, FORM)?.iter()
                                              .map(|point| coordinates(point, FORM))
                                              .collect::<EvalResult<Vec<_>>>()?;

        discrete_plot(&points, &PlotOptions::from_list(&options, FORM)?)
    }

    /// Evaluates `(continuous-plot FUNC BOUNDS [OPTIONS])`.
    ///
    /// `FUNC` is resolved like the procedure of `map` and must return a real
    /// number for every sample; `BOUNDS` must evaluate to `(list lower
    /// upper)`.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::{environment::Environment, parser::core::parse_source};
    ///
    /// let mut env = Environment::new();
    /// let mut ast = parse_source("(begin (define f (lambda (x) (* 2 x))) \
    ///                                    (continuous-plot f (list -2 2)))").unwrap();
    /// let plot = ast.eval(&mut env).unwrap();
    /// assert!(plot.is_list());
    /// ```
    pub(crate) fn eval_continuous_plot(&mut self, env: &mut Environment) -> EvalResult<Self> {
        const FORM: &str = "continuous-plot";
        if !(2..=3).contains(&self.tail().len()) {
            return Err(SemanticError::ArgumentCountMismatch { procedure: FORM.to_string() });
        }

        let callable = Callable::resolve(&self.tail()[0], env, FORM)?;
        if !callable.accepts(1) {
            return Err(SemanticError::ArgumentCountMismatch { procedure: FORM.to_string() });
        }

        let bounds = self.tail_mut()[1].eval(env)?;
        let (lower, upper) = coordinates(&bounds, FORM)?;

        let options = match self.tail_mut().get_mut(2) {
            Some(node) => PlotOptions::from_list(&node.eval(env)?, FORM)?,
            None => PlotOptions::default(),
        };

        let env = &*env;
        continuous_plot(|x| {
                            let y = callable.call(&[x.into()], env)?;
                            expect_number(&y, FORM)
                        },
                        lower,
                        upper,
                        &options)
    }
}
