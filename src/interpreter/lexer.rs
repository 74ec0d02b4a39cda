use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Outside of string literals whitespace separates atomic tokens and `;`
/// starts a comment that runs to the end of the line.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `(`
    #[token("(")]
    Open,
    /// `)`
    #[token(")")]
    Close,
    /// `"`; toggles string-literal mode.
    #[token("\"")]
    Quote,
    /// Atomic text such as `define`, `3.14` or `-pi`. Inside a string literal
    /// this is the literal's text, whitespace and parentheses included.
    #[regex(r#"[^ \t\r\n\f();"]+"#, |lex| lex.slice().to_string(), allow_greedy = true)]
    Text(String),
    /// `; Comments.`
    #[regex(r";[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// The inside of a string literal: everything up to the closing quote.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
enum LiteralSpan {
    #[token("\"")]
    Quote,
    #[regex(r#"[^"]+"#, |lex| {
        let text = lex.slice();
        lex.extras.line += text.chars().filter(|&c| c == '\n').count();
        text.to_string()
    }, allow_greedy = true)]
    Text(String),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts program text into a flat sequence of `(token, line)` pairs.
///
/// A `"` switches the lexer into string-literal mode, where all characters up
/// to the next `"` form a single [`Token::Text`]. The quotes themselves are
/// emitted as [`Token::Quote`] markers so the parser can tag the enclosed
/// text as a string literal. An unterminated literal simply ends the sequence
/// after its opening marker and text; the parser reports it.
///
/// No errors are raised at this layer.
///
/// # Example
/// ```
/// use plotscript::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("(f \"a (b)\") ; done").into_iter()
///                                                         .map(|(t, _)| t)
///                                                         .collect();
/// assert_eq!(tokens,
///            vec![Token::Open,
///                 Token::Text("f".into()),
///                 Token::Quote,
///                 Token::Text("a (b)".into()),
///                 Token::Quote,
///                 Token::Close]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Quote) => {
                tokens.push((Token::Quote, lexer.extras.line));

                let mut literal = lexer.morph::<LiteralSpan>();
                while let Some(part) = literal.next() {
                    match part {
                        Ok(LiteralSpan::Text(text)) => {
                            tokens.push((Token::Text(text), literal.extras.line));
                        },
                        Ok(LiteralSpan::Quote) => {
                            tokens.push((Token::Quote, literal.extras.line));
                            break;
                        },
                        Err(()) => {},
                    }
                }
                lexer = literal.morph::<Token>();
            },
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {},
        }
    }

    tokens
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
            Self::Quote => write!(f, "\""),
            Self::Text(text) => write!(f, "{text}"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}
