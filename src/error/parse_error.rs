#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
///
/// The front-end only needs the fact that parsing failed, so every variant
/// renders with the same `Invalid Expression. Could not parse` prefix and a
/// short detail.
pub enum ParseError {
    /// The input contained no tokens at all.
    EmptyInput,
    /// An opening parenthesis was not followed by a head atom.
    MissingHead {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An atomic token could not be turned into a number or a symbol.
    InvalidAtom {
        /// The offending token text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An atom appeared outside of any parenthesized form.
    UnexpectedAtom {
        /// The offending token text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis did not match any open form.
    UnexpectedClose {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input ended while forms were still open.
    UnterminatedExpression {
        /// Number of forms left open.
        depth: usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// The source line where the literal started.
        line: usize,
    },
    /// Tokens remained after the single top-level form was closed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid Expression. Could not parse: ")?;

        match self {
            Self::EmptyInput => write!(f, "empty input."),
            Self::MissingHead { line } => {
                write!(f, "expected an atom after '(' on line {line}.")
            },
            Self::InvalidAtom { token, line } => {
                write!(f, "invalid atom '{token}' on line {line}.")
            },
            Self::UnexpectedAtom { token, line } => write!(f,
                                                           "atom '{token}' outside of an expression on line {line}."),
            Self::UnexpectedClose { line } => {
                write!(f, "unmatched ')' on line {line}.")
            },
            Self::UnterminatedExpression { depth } => {
                write!(f, "{depth} unclosed '(' at end of input.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "string literal opened on line {line} is never closed.")
            },
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "extra input after expression on line {line}: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
