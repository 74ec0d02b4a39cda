use log::trace;

use crate::interpreter::{
    environment::Environment,
    evaluator::core::EvalResult,
    parser::core::{ParseResult, parse_source},
    value::expression::Expression,
};

/// The message a front-end shows for any parse failure.
pub const PARSE_FAILURE: &str = "Error: Invalid Expression. Could not parse.";

/// A parsed program together with the environment it runs in.
///
/// The environment persists across programs: bindings made by one
/// [`Interpreter::evaluate`] are visible to the next until
/// [`Interpreter::clear`] is called.
///
/// ## Usage
///
/// ```
/// use plotscript::interpreter::{session::Interpreter, value::expression::Expression};
///
/// let mut interp = Interpreter::new();
/// assert!(interp.parse_stream("(define r 10)"));
/// interp.evaluate().unwrap();
///
/// let area = interp.run("(* r r)").unwrap();
/// assert_eq!(area, Expression::from(100.0));
///
/// interp.clear();
/// assert!(interp.run("(* r r)").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    ast: Expression,
    env: Environment,
}

impl Interpreter {
    /// Creates an interpreter with a freshly seeded environment and no
    /// program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `source` as the current program.
    ///
    /// Returns `true` on success. On failure the previous program is kept.
    pub fn parse_stream(&mut self, source: &str) -> bool {
        self.parse(source).is_ok()
    }

    /// Parses `source` as the current program, reporting why it failed.
    ///
    /// # Errors
    /// The [`crate::error::ParseError`] describing the first structural violation.
    pub fn parse(&mut self, source: &str) -> ParseResult<()> {
        self.ast = parse_source(source)?;
        Ok(())
    }

    /// Evaluates the current program against the persistent environment.
    ///
    /// # Errors
    /// The fault that stopped evaluation. Bindings made before it remain.
    pub fn evaluate(&mut self) -> EvalResult<Expression> {
        trace!("evaluating {}", self.ast);
        self.ast.eval(&mut self.env)
    }

    /// Parses and evaluates `source` in one step.
    ///
    /// # Errors
    /// A [`crate::error::ParseError`] or a [`crate::error::SemanticError`], boxed.
    pub fn run(&mut self, source: &str) -> Result<Expression, Box<dyn std::error::Error>> {
        self.parse(source)?;
        Ok(self.evaluate()?)
    }

    /// Resets the environment to its default bindings.
    pub fn clear(&mut self) {
        self.env.reset();
    }

    /// The current program.
    #[must_use]
    pub const fn program(&self) -> &Expression {
        &self.ast
    }

    /// The persistent environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }
}
