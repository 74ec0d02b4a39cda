#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all faults that can be raised during evaluation.
///
/// A fault unwinds to the nearest evaluation boundary (one kernel message or
/// one call to [`crate::interpreter::session::Interpreter::evaluate`]). The
/// environment keeps whatever bindings were made before the fault.
pub enum SemanticError {
    /// Tried to look up a symbol with no value binding.
    UnknownSymbol {
        /// The name of the symbol.
        name: String,
    },
    /// A terminal expression had a head that cannot be evaluated.
    InvalidTerminal,
    /// Tried to bind something that is not a symbol.
    NonSymbolBinding,
    /// The wrong number of arguments was supplied to a form or procedure.
    ArgumentCountMismatch {
        /// The special form or procedure that was called.
        procedure: String,
    },
    /// A numeric argument was expected, but not found.
    ExpectedNumber {
        /// The procedure that was called.
        procedure: String,
    },
    /// A complex argument was expected, but not found.
    ExpectedComplex {
        /// The procedure that was called.
        procedure: String,
    },
    /// A list argument was expected, but not found.
    ExpectedList {
        /// The form or procedure that was called.
        procedure: String,
    },
    /// A bare symbol was expected, but not found.
    ExpectedSymbol {
        /// The special form that required the symbol.
        form: String,
    },
    /// A string literal was expected, but not found.
    ExpectedStringLiteral {
        /// The special form that required the literal.
        form: String,
    },
    /// Tried to take elements from a list that is too short.
    EmptyList {
        /// The procedure that was called.
        procedure: String,
    },
    /// Attempted to redefine a special-form keyword.
    SpecialFormRedefinition {
        /// The keyword.
        name: String,
    },
    /// Attempted to redefine or shadow a builtin procedure.
    BuiltinRedefinition {
        /// The procedure name.
        name: String,
    },
    /// Attempted to redefine a symbol that is already bound.
    SymbolRedefinition {
        /// The symbol name.
        name: String,
    },
    /// The head of an application is neither a builtin nor a bound lambda.
    NotAProcedure {
        /// The offending head, rendered.
        name: String,
    },
    /// An argument is outside the domain of a procedure.
    DomainError {
        /// The procedure that was called.
        procedure: String,
        /// Why the argument is rejected.
        details:   String,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { name } => {
                write!(f, "Error during evaluation: unknown symbol '{name}'.")
            },
            Self::InvalidTerminal => {
                write!(f, "Error during evaluation: invalid type in terminal expression.")
            },
            Self::NonSymbolBinding => {
                write!(f, "Error during evaluation: attempt to add non-symbol to environment.")
            },
            Self::ArgumentCountMismatch { procedure } => write!(f,
                                                                "Error in call to {procedure}: invalid number of arguments."),
            Self::ExpectedNumber { procedure } => {
                write!(f, "Error in call to {procedure}: argument not a number.")
            },
            Self::ExpectedComplex { procedure } => write!(f,
                                                          "Error in call to {procedure}: argument not a complex number."),
            Self::ExpectedList { procedure } => {
                write!(f, "Error in call to {procedure}: argument not a list.")
            },
            Self::ExpectedSymbol { form } => {
                write!(f, "Error during evaluation: first argument to {form} not a symbol.")
            },
            Self::ExpectedStringLiteral { form } => write!(f,
                                                           "Error in {form}: first argument not a string literal."),
            Self::EmptyList { procedure } => {
                write!(f, "Error in call to {procedure}: list has too few elements.")
            },
            Self::SpecialFormRedefinition { name } => write!(f,
                                                             "Error during evaluation: attempt to redefine special-form '{name}'."),
            Self::BuiltinRedefinition { name } => write!(f,
                                                         "Error during evaluation: attempt to redefine built-in procedure '{name}'."),
            Self::SymbolRedefinition { name } => write!(f,
                                                        "Error during evaluation: attempt to redefine previously defined symbol '{name}'."),
            Self::NotAProcedure { name } => write!(f,
                                                   "Error during evaluation: '{name}' does not name a procedure."),
            Self::DomainError { procedure, details } => {
                write!(f, "Error in call to {procedure}: {details}.")
            },
        }
    }
}

impl std::error::Error for SemanticError {}
