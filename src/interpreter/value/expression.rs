use std::{collections::BTreeMap, fmt::Display};

use crate::interpreter::value::{atom::Atom, complex::ComplexNumber};

/// The head symbol that marks an expression as a list value.
pub const LIST: &str = "list";
/// The head symbol that marks an expression as a lambda value.
pub const LAMBDA: &str = "lambda";

/// A tree of atoms that doubles as syntax tree and runtime value.
///
/// An expression is a `head` atom followed by an ordered, possibly empty
/// `tail` of child expressions. Children are owned by value, so cloning an
/// expression deep-copies its whole subtree together with its property map.
///
/// A list value is an expression whose head is the symbol `list`; a lambda
/// value is an expression whose head is the symbol `lambda` and whose tail is
/// `[parameter-list, body]`. Neither has a dedicated runtime type.
///
/// Properties carry out-of-band metadata (such as the `object-name` of a plot
/// glyph). They take no part in equality and are never rendered.
#[derive(Debug, Clone, Default)]
pub struct Expression {
    head:       Atom,
    tail:       Vec<Self>,
    properties: BTreeMap<String, Self>,
}

impl From<Atom> for Expression {
    fn from(head: Atom) -> Self {
        Self::new(head)
    }
}

impl From<f64> for Expression {
    fn from(v: f64) -> Self {
        Self::new(Atom::Number(v))
    }
}

impl From<ComplexNumber> for Expression {
    fn from(c: ComplexNumber) -> Self {
        Self::new(Atom::Complex(c))
    }
}

impl Expression {
    /// Creates a leaf expression with the given head and an empty tail.
    #[must_use]
    pub fn new(head: Atom) -> Self {
        Self { head,
               tail: Vec::new(),
               properties: BTreeMap::new() }
    }

    /// Creates the empty (`None`) expression.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a list value holding `items` in order.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::value::expression::Expression;
    ///
    /// let l = Expression::list(vec![1.0.into(), 2.0.into()]);
    /// assert!(l.is_list());
    /// assert_eq!(l.tail().len(), 2);
    /// assert_eq!(l.to_string(), "(list 1 2)");
    /// ```
    #[must_use]
    pub fn list(items: Vec<Self>) -> Self {
        Self::with_tail(Atom::symbol(LIST), items)
    }

    /// Creates an expression from a head and an already built tail.
    #[must_use]
    pub fn with_tail(head: Atom, tail: Vec<Self>) -> Self {
        Self { head,
               tail,
               properties: BTreeMap::new() }
    }

    /// Creates a leaf holding a symbol.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(Atom::symbol(name))
    }

    /// Creates a leaf holding a string literal.
    #[must_use]
    pub fn string_literal(text: impl Into<String>) -> Self {
        Self::new(Atom::string_literal(text))
    }

    /// The head atom.
    #[must_use]
    pub const fn head(&self) -> &Atom {
        &self.head
    }

    /// The ordered children.
    #[must_use]
    pub fn tail(&self) -> &[Self] {
        &self.tail
    }

    /// Mutable access to the children.
    pub fn tail_mut(&mut self) -> &mut Vec<Self> {
        &mut self.tail
    }

    /// Appends a leaf child built from `atom`.
    pub fn append(&mut self, atom: Atom) {
        self.tail.push(Self::new(atom));
    }

    /// Appends a child expression.
    pub fn push(&mut self, child: Self) {
        self.tail.push(child);
    }

    /// Returns `true` when both head and tail are empty.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.head.is_none() && self.tail.is_empty()
    }

    /// Returns `true` for a list value.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.head.is_symbol_named(LIST)
    }

    /// Returns `true` for a lambda value.
    #[must_use]
    pub fn is_lambda(&self) -> bool {
        self.head.is_symbol_named(LAMBDA) && self.tail.len() == 2
    }

    /// Returns `true` if the expression has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.tail.is_empty()
    }

    /// Looks up the property attached under `tag`.
    #[must_use]
    pub fn property(&self, tag: &str) -> Option<&Self> {
        self.properties.get(tag)
    }

    /// Attaches `value` under `tag`, replacing any previous value.
    pub fn set_property(&mut self, tag: impl Into<String>, value: Self) {
        self.properties.insert(tag.into(), value);
    }

    /// Builder form of [`Self::set_property`].
    #[must_use]
    pub fn with_property(mut self, tag: impl Into<String>, value: Self) -> Self {
        self.set_property(tag, value);
        self
    }

    fn fmt_nested(&self, f: &mut std::fmt::Formatter<'_>, top_level: bool) -> std::fmt::Result {
        if self.head.is_none() && self.tail.is_empty() {
            return write!(f, "{}", self.head);
        }
        if self.tail.is_empty() && !self.is_list() {
            return if top_level {
                write!(f, "({})", self.head)
            } else {
                write!(f, "{}", self.head)
            };
        }

        write!(f, "({}", self.head)?;
        for child in &self.tail {
            write!(f, " ")?;
            child.fmt_nested(f, false)?;
        }
        write!(f, ")")
    }
}

/// Structural equality: same head, same tail length, pairwise-equal
/// children. Properties are ignored.
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head
        && self.tail.len() == other.tail.len()
        && self.tail.iter().zip(&other.tail).all(|(l, r)| l == r)
    }
}

/// Canonical rendering that mirrors the input syntax.
///
/// A leaf renders as `(atom)`; a compound as `(head child ...)` with leaf
/// children bare. Parsing the rendering of a value built from numbers,
/// symbols and string literals reproduces an equal expression.
impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_nested(f, true)
    }
}
