use crate::interpreter::{
    environment::Environment,
    evaluator::{
        core::EvalResult,
        utils::{check_arity, expect_string_literal},
    },
    value::expression::Expression,
};

impl Expression {
    /// Evaluates `(set-property TAG VALUE TARGET)`.
    ///
    /// Returns the evaluated target with `TAG` attached. The target node of
    /// the program is decorated with the same property.
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
    /// let mut ast = parse_source(r#"(set-property "number" "three" (3))"#).unwrap();
    /// let value = ast.eval(&mut env).unwrap();
    ///
    /// assert_eq!(value, Expression::from(3.0));
    /// assert_eq!(value.property("number"), Some(&Expression::string_literal("three")));
    /// ```
    pub(crate) fn eval_set_property(&mut self, env: &mut Environment) -> EvalResult<Self> {
        check_arity(self.tail(), 3, "set-property")?;
        let tag = expect_string_literal(&self.tail()[0], "set-property")?.to_string();

        let property = self.tail_mut()[1].eval(env)?;
        let mut value = self.tail_mut()[2].eval(env)?;

        self.tail_mut()[2].set_property(tag.clone(), property.clone());
        value.set_property(tag, property);
        Ok(value)
    }

    /// Evaluates `(get-property TAG TARGET)`.
    ///
    /// Returns the property of the evaluated target under `TAG`, or the
    /// `None` expression when it has none.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::{environment::Environment, parser::core::parse_source};
    ///
    /// let mut env = Environment::new();
    /// let mut ast = parse_source(r#"(get-property "missing" (3))"#).unwrap();
    /// assert!(ast.eval(&mut env).unwrap().is_none());
    /// ```
    pub(crate) fn eval_get_property(&mut self, env: &mut Environment) -> EvalResult<Self> {
        check_arity(self.tail(), 2, "get-property")?;
        let tag = expect_string_literal(&self.tail()[0], "get-property")?.to_string();

        let target = self.tail_mut()[1].eval(env)?;
        Ok(target.property(&tag).cloned().unwrap_or_default())
    }
}
