use std::fmt::Display;

use crate::{interpreter::value::complex::ComplexNumber, util::num::approx_eq};

/// The tagged terminal value of the language.
///
/// Exactly one variant is active at a time. Text-carrying variants own their
/// text. There is no implicit coercion between variants.
#[derive(Debug, Clone, Default)]
pub enum Atom {
    /// The empty atom, produced by failed lookups such as a missing property.
    #[default]
    None,
    /// A real number (double precision floating-point).
    Number(f64),
    /// A complex number.
    Complex(ComplexNumber),
    /// A symbol naming a binding, a special form or a procedure.
    Symbol(String),
    /// Text that appeared between double quotes.
    StringLiteral(String),
}

impl From<f64> for Atom {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<ComplexNumber> for Atom {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl Atom {
    /// Creates a symbol atom.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a string-literal atom.
    pub fn string_literal(text: impl Into<String>) -> Self {
        Self::StringLiteral(text.into())
    }

    /// Infers an atom from the text of a token.
    ///
    /// Text that parses in full as a floating-point literal is a number.
    /// Otherwise text that does not begin with a digit is a symbol. Anything
    /// else (such as `1abc`) yields `None`.
    ///
    /// Words like `inf` or `nan` are symbols, not numbers: a number needs at
    /// least one digit.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::value::atom::Atom;
    ///
    /// assert_eq!(Atom::from_token("1e-0"), Atom::Number(1.0));
    /// assert_eq!(Atom::from_token("-pi"), Atom::symbol("-pi"));
    /// assert!(Atom::from_token("1abc").is_none());
    /// ```
    #[must_use]
    pub fn from_token(text: &str) -> Self {
        if text.bytes().any(|b| b.is_ascii_digit())
           && let Ok(value) = text.parse::<f64>()
        {
            return Self::Number(value);
        }

        match text.chars().next() {
            Some(c) if !c.is_ascii_digit() => Self::Symbol(text.to_string()),
            _ => Self::None,
        }
    }

    /// Returns `true` for the empty atom.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
    /// Returns `true` for a real number.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
    /// Returns `true` for a complex number.
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_))
    }
    /// Returns `true` for a symbol.
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
    /// Returns `true` for a string literal.
    #[must_use]
    pub const fn is_string_literal(&self) -> bool {
        matches!(self, Self::StringLiteral(_))
    }

    /// The real value, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
    /// The complex value, if this is a complex number.
    #[must_use]
    pub const fn as_complex(&self) -> Option<ComplexNumber> {
        match self {
            Self::Complex(c) => Some(*c),
            _ => None,
        }
    }
    /// The name, if this is a symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }
    /// The text, if this is a string literal.
    #[must_use]
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Self::StringLiteral(s) => Some(s),
            _ => None,
        }
    }
    /// Returns `true` if this is the symbol `name`.
    #[must_use]
    pub fn is_symbol_named(&self, name: &str) -> bool {
        self.as_symbol() == Some(name)
    }
}

/// Same-variant comparison. Numbers compare within machine epsilon; symbols
/// and string literals compare their text exactly.
impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Number(a), Self::Number(b)) => approx_eq(*a, *b),
            (Self::Complex(a), Self::Complex(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b))
            | (Self::StringLiteral(a), Self::StringLiteral(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::StringLiteral(s) => write!(f, "\"{s}\""),
        }
    }
}
