use plotscript::{
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::parse_source,
        value::{atom::Atom, expression::Expression},
    },
};

fn assert_parse_failure(src: &str) {
    if let Ok(ast) = parse_source(src) {
        panic!("{src:?} parsed as {ast} but was expected to fail")
    }
}

#[test]
fn tokens_carry_their_line() {
    let tokens = tokenize("(begin\n  ; comment (ignored)\n  (define a 1))");
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();

    assert_eq!(tokens[0], (Token::Open, 1));
    assert_eq!(tokens[2], (Token::Open, 3));
    assert_eq!(*lines.last().unwrap(), 3);
    assert!(!tokens.iter()
                   .any(|(t, _)| matches!(t, Token::Text(text) if text.contains("comment"))));
}

#[test]
fn string_literals_keep_whitespace_parens_and_semicolons() {
    let tokens: Vec<Token> = tokenize(r#"("a ; (b)")"#).into_iter()
                                                        .map(|(t, _)| t)
                                                        .collect();
    assert_eq!(tokens,
               vec![Token::Open,
                    Token::Quote,
                    Token::Text("a ; (b)".into()),
                    Token::Quote,
                    Token::Close]);
}

#[test]
fn builds_nested_trees() {
    let ast = parse_source("(begin (define r 10) (* pi (* r r)))").unwrap();

    assert_eq!(ast.head(), &Atom::symbol("begin"));
    assert_eq!(ast.tail().len(), 2);

    let define = &ast.tail()[0];
    assert_eq!(define.head(), &Atom::symbol("define"));
    assert_eq!(define.tail(),
               &[Expression::symbol("r"), Expression::from(10.0)]);

    let product = &ast.tail()[1];
    assert_eq!(product.tail()[1].tail().len(), 2);
}

#[test]
fn infers_atoms() {
    let ast = parse_source(r#"(f 1 -2.5 1e3 -pi "text" inf)"#).unwrap();
    assert_eq!(ast.tail(),
               &[Expression::from(1.0),
                 Expression::from(-2.5),
                 Expression::from(1000.0),
                 Expression::symbol("-pi"),
                 Expression::string_literal("text"),
                 Expression::symbol("inf")]);
}

#[test]
fn single_leaf_program() {
    assert_eq!(parse_source("(3)").unwrap(), Expression::from(3.0));
    assert_eq!(parse_source("  (pi)  ; trailing comment").unwrap(),
               Expression::symbol("pi"));
}

#[test]
fn rejects_malformed_programs() {
    assert_parse_failure("");
    assert_parse_failure("   ; only a comment");
    assert_parse_failure("hello");
    assert_parse_failure("(+ 1 2) (+ 3 4)");
    assert_parse_failure("(+ 1 2");
    assert_parse_failure("(+ 1 2))");
    assert_parse_failure(")");
    assert_parse_failure("()");
    assert_parse_failure("((+ 1 2))");
    assert_parse_failure("(1abc)");
    assert_parse_failure("(f 2x)");
    assert_parse_failure(r#"(f "unterminated)"#);
    assert_parse_failure(r#"(f "a" ")"#);
}

#[test]
fn errors_describe_the_violation() {
    assert_eq!(parse_source(""), Err(ParseError::EmptyInput));
    assert!(matches!(parse_source("(+ 1 2"),
                     Err(ParseError::UnterminatedExpression { depth: 1 })));
    assert!(matches!(parse_source("(f\n 1abc)"),
                     Err(ParseError::InvalidAtom { ref token, line: 2 }) if token == "1abc"));
    assert!(matches!(parse_source("(a) (b)"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));

    let message = parse_source("(1abc)").unwrap_err().to_string();
    assert!(message.starts_with("Invalid Expression. Could not parse"));
}
