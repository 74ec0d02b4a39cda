use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        value::{atom::Atom, expression::Expression},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses program text into a single expression tree.
///
/// Convenience wrapper over [`tokenize`] and [`parse`].
///
/// # Example
/// ```
/// use plotscript::interpreter::parser::core::parse_source;
///
/// let ast = parse_source("(begin (define r 10) (* pi (* r r)))").unwrap();
/// assert_eq!(ast.tail().len(), 2);
///
/// assert!(parse_source("(+ 1 2) (+ 3 4)").is_err());
/// assert!(parse_source("(1abc)").is_err());
/// assert!(parse_source("hello").is_err());
/// ```
pub fn parse_source(source: &str) -> ParseResult<Expression> {
    parse(&tokenize(source))
}

/// Builds one expression from a token sequence.
///
/// An opening parenthesis starts a new node whose head is the next atomic
/// token. Any other atomic token is appended as a leaf to the node on top of
/// the stack. A closing parenthesis pops the stack and attaches the finished
/// node to its parent; popping the outermost node finishes the tree.
///
/// Text between quote markers becomes a string-literal atom. Outside quotes,
/// text is inferred as a number or symbol by [`Atom::from_token`].
///
/// # Errors
/// Fails on empty input, a `(` without a head, an invalid atom, an atom
/// outside any form, an unmatched `)`, unclosed forms, an unterminated string
/// literal, or any token after the outermost `)`. Exactly one top-level form
/// is accepted.
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expression> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut stack: Vec<Expression> = Vec::new();
    let mut at_head = false;
    let mut in_literal = false;
    let mut literal_line = 0;
    let mut root = None;

    let mut iter = tokens.iter();

    while let Some((token, line)) = iter.next() {
        let line = *line;
        match token {
            Token::Open => {
                if at_head {
                    return Err(ParseError::MissingHead { line });
                }
                at_head = true;
            },
            Token::Close => {
                if at_head {
                    return Err(ParseError::MissingHead { line });
                }
                if in_literal {
                    return Err(ParseError::UnterminatedString { line: literal_line });
                }
                let node = stack.pop().ok_or(ParseError::UnexpectedClose { line })?;

                match stack.last_mut() {
                    Some(parent) => parent.push(node),
                    None => {
                        root = Some(node);
                        break;
                    },
                }
            },
            Token::Quote => {
                in_literal = !in_literal;
                if in_literal {
                    literal_line = line;
                }
            },
            Token::Text(text) => {
                let atom = if in_literal {
                    Atom::string_literal(text.clone())
                } else {
                    Atom::from_token(text)
                };
                if atom.is_none() {
                    return Err(ParseError::InvalidAtom { token: text.clone(),
                                                         line });
                }

                if at_head {
                    stack.push(Expression::new(atom));
                    at_head = false;
                } else if let Some(top) = stack.last_mut() {
                    top.append(atom);
                } else {
                    return Err(ParseError::UnexpectedAtom { token: text.clone(),
                                                            line });
                }
            },
            Token::Comment | Token::NewLine | Token::Ignored => {},
        }
    }

    if let Some((token, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          line:  *line, });
    }
    if in_literal {
        return Err(ParseError::UnterminatedString { line: literal_line });
    }

    match root {
        Some(ast) => Ok(ast),
        None if !stack.is_empty() => {
            Err(ParseError::UnterminatedExpression { depth: stack.len() })
        },
        None if at_head => {
            let line = tokens.last().map_or(1, |(_, line)| *line);
            Err(ParseError::MissingHead { line })
        },
        None => Err(ParseError::EmptyInput),
    }
}
