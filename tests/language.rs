use std::f64::consts::PI;

use plotscript::{
    get_result,
    interpreter::{
        environment::Environment,
        parser::core::parse_source,
        session::Interpreter,
        value::{
            complex::{ComplexNumber, I},
            expression::Expression,
        },
    },
};

fn eval(src: &str) -> Expression {
    get_result(src).unwrap_or_else(|e| panic!("Program {src} failed: {e}"))
}

fn assert_renders(src: &str, expected: &str) {
    assert_eq!(eval(src).to_string(), expected, "rendering of {src}");
}

fn assert_failure(src: &str) {
    if let Ok(value) = get_result(src) {
        panic!("Program {src} succeeded with {value} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_renders("(+ 1 2)", "(3)");
    assert_renders("(+ 1 2 3 4 5 6)", "(21)");
    assert_renders("(* 1 -1)", "(-1)");
    assert_renders("(* 2 3 4)", "(24)");
    assert_renders("(/ -1 1)", "(-1)");
    assert_renders("(/ 4)", "(0.25)");
    assert_renders("(- 5)", "(-5)");
    assert_renders("(- 5 7)", "(-2)");
    assert_renders("(^ 2 10)", "(1024)");
}

#[test]
fn arithmetic_arity_and_operand_faults() {
    assert_failure("(- 1 2 3)");
    assert_failure("(/ 1 2 3)");
    assert_failure("(^ 2)");
    assert_failure("(* 2)");
    assert_failure("(sqrt 1 2)");
    assert_failure(r#"(+ 1 "two")"#);
    assert_failure("(+ 1 (list 2))");
}

#[test]
fn square_roots_of_negatives_are_imaginary() {
    assert_eq!(eval("(sqrt -1)"), Expression::from(I));
    assert_eq!(eval("(sqrt 9)"), Expression::from(3.0));
    assert_eq!(eval("(sqrt -4)"), Expression::from(ComplexNumber::new(0.0, 2.0)));
}

#[test]
fn complex_promotion() {
    assert_eq!(eval("(+ 1 I)"), Expression::from(ComplexNumber::new(1.0, 1.0)));
    assert_eq!(eval("(* 2 I)"), Expression::from(ComplexNumber::new(0.0, 2.0)));
    assert_eq!(eval("(- I)"), Expression::from(-I));
    assert_eq!(eval("(^ I 2)"), Expression::from(ComplexNumber::new(-1.0, 0.0)));
    assert_renders("(+ 1 I)", "(1,1)");
}

#[test]
fn complex_accessors() {
    assert_eq!(eval("(real (+ 3 (* 4 I)))"), Expression::from(3.0));
    assert_eq!(eval("(imag (+ 3 (* 4 I)))"), Expression::from(4.0));
    assert_eq!(eval("(mag (+ 3 (* 4 I)))"), Expression::from(5.0));
    assert_eq!(eval("(arg I)"), Expression::from(PI / 2.0));
    assert_eq!(eval("(conj (+ 3 (* 4 I)))"),
               Expression::from(ComplexNumber::new(3.0, -4.0)));

    assert_failure("(real 1)");
    assert_failure("(mag I I)");
}

#[test]
fn transcendental_functions_are_real_only() {
    assert_eq!(eval("(ln e)"), Expression::from(1.0));
    assert_eq!(eval("(sin 0)"), Expression::from(0.0));
    assert_eq!(eval("(cos 0)"), Expression::from(1.0));
    assert_eq!(eval("(tan 0)"), Expression::from(0.0));

    assert_failure("(ln -1)");
    assert_failure("(ln 0)");
    assert_failure("(sin I)");
    assert_failure("(cos pi pi)");
}

#[test]
fn define_and_begin() {
    assert_eq!(eval("(begin (define r 10) (* pi (* r r)))"), Expression::from(PI * 100.0));
    assert_renders("(define answer 42)", "(42)");
    assert_renders("(begin (define a 1) (define b (+ a 1)) b)", "(2)");
    assert_failure("(begin)");
    assert_failure("(define a)");
    assert_failure("(define 1 2)");
}

#[test]
fn protected_names_cannot_be_redefined() {
    assert_failure("(define pi 3.14)");
    assert_failure("(define begin 1)");
    assert_failure("(define define 1)");
    assert_failure("(define lambda 1)");
    assert_failure("(define + 1)");
    assert_failure("(define sqrt 1)");
    assert_failure("(begin (define a 1) (define a 2))");
}

#[test]
fn constants() {
    assert_eq!(eval("(pi)"), Expression::from(PI));
    assert_eq!(eval("(-pi)"), Expression::from(-PI));
    assert_eq!(eval("(e)"), Expression::from(std::f64::consts::E));
    assert_eq!(eval("(-I)"), Expression::from(-I));
}

#[test]
fn unknown_symbols_and_heads() {
    assert_failure("(undefined)");
    assert_failure("(undefined 1 2)");
    assert_failure("(begin (define a 1) (a 2))");
    assert_failure("(1 2)");
}

#[test]
fn lambdas() {
    assert_renders("(begin (define f (lambda (x) (+ 2 x))) (f 2))", "(4)");
    assert_renders("(begin (define add (lambda (x y) (+ x y))) (add 3 4))", "(7)");
    assert_renders("(lambda (x) (+ 2 x))", "(lambda (list x) (+ 2 x))");

    // Parameters shadow globals only inside the call.
    assert_renders("(begin (define x 100) (define f (lambda (x) (* x 2))) (+ (f 1) x))",
                   "(102)");

    // The body sees bindings made after the lambda was defined.
    assert_renders("(begin (define f (lambda (x) (+ x y))) (define y 5) (f 1))", "(6)");

    // Definitions in the body stay private to the call.
    let mut interp = Interpreter::new();
    interp.run("(define f (lambda (x) (begin (define inner x) inner)))")
          .unwrap();
    assert_eq!(interp.run("(f 3)").unwrap(), Expression::from(3.0));
    assert!(interp.run("(inner)").is_err());
}

#[test]
fn lambda_faults() {
    assert_failure("(lambda (sqrt) (+ sqrt 1))");
    assert_failure("(lambda (x + y) 1)");
    assert_failure("(lambda (x))");
    assert_failure("(lambda (1) 1)");
    assert_failure("(begin (define f (lambda (x) x)) (f 1 2))");
    assert_failure("(begin (define f (lambda (x y) x)) (f 1))");
}

#[test]
fn apply_and_map() {
    assert_renders("(apply + (list 1 2 3 4))", "(10)");
    assert_renders("(map / (list 1 2 4))", "(list 1 0.5 0.25)");
    assert_renders("(begin (define f (lambda (x y) (- x y))) (apply f (list 5 3)))", "(2)");
    assert_renders("(begin (define sq (lambda (x) (* x x))) (map sq (list 1 2 3)))",
                   "(list 1 4 9)");
    assert_renders("(map sqrt (list))", "(list)");
}

#[test]
fn empty_sums_and_products() {
    assert_renders("(apply + (list))", "(0)");
    assert_renders("(apply * (list))", "(1)");
    assert_renders("(apply + (list 5))", "(5)");
    assert_failure("(apply * (list 5))");
}

#[test]
fn apply_evaluates_lambda_arguments_again() {
    // The property does not survive into the lambda body.
    assert!(eval(r#"(begin (define f (lambda (x) (get-property "a" x)))
                           (apply f (list (set-property "a" 1 2))))"#).is_none());

    // Lambda values evaluate to themselves.
    assert_renders("(begin (define g (lambda (x) (* x 2)))
                           (define h (lambda (k) (apply k (list 21))))
                           (apply h (list g)))",
                   "(42)");
}

#[test]
fn apply_and_map_faults() {
    assert_failure("(apply + 3)");
    assert_failure("(apply (+ z I) (list 0))");
    assert_failure("(apply undefined (list 1))");
    assert_failure("(apply + (list 1) (list 2))");
    assert_failure("(begin (define a 1) (apply a (list 1)))");
    assert_failure("(map + 3)");
    assert_failure("(map ^ (list 1 2))");
    assert_failure("(begin (define f (lambda (x y) x)) (map f (list 1 2)))");
    assert_failure("(map 3 (list 1 2))");
}

#[test]
fn list_procedures() {
    assert_renders("(list)", "(list)");
    assert_renders("(list 1 2 3)", "(list 1 2 3)");
    assert_renders("(list 1 (list 2 3))", "(list 1 (list 2 3))");
    assert_renders("(first (list 1 2))", "(1)");
    assert_renders("(rest (list 1 2 3))", "(list 2 3)");
    assert_renders("(length (list 1 2 3))", "(3)");
    assert_renders("(length (list))", "(0)");
    assert_renders("(append (list 1 2) 3)", "(list 1 2 3)");
    assert_renders("(join (list 1 2) (list 3 4))", "(list 1 2 3 4)");
    assert_renders("(range 0 5 1)", "(list 0 1 2 3 4 5)");
    assert_renders("(range -1 1 0.5)", "(list -1 -0.5 0 0.5 1)");
}

#[test]
fn list_procedure_faults() {
    assert_failure("(first (list))");
    assert_failure("(rest (list))");
    assert_failure("(rest (list 1))");
    assert_failure("(first 1)");
    assert_failure("(length 1)");
    assert_failure("(append 1 2)");
    assert_failure("(join (list 1) 2)");
    assert_failure("(range 1 0 1)");
    assert_failure("(range 0 1 0)");
    assert_failure("(range 0 1 -1)");
    assert_failure("(range 0 1 I)");
}

#[test]
fn properties() {
    let value = eval(r#"(set-property "number" "three" (3))"#);
    assert_eq!(value, Expression::from(3.0));
    assert_eq!(value.property("number"), Some(&Expression::string_literal("three")));

    assert_renders(r#"(get-property "number" (set-property "number" (+ 1 2) (list)))"#,
                   "(3)");
    assert_renders(r#"(begin (define a (set-property "note" "hi" (1))) (get-property "note" a))"#,
                   "(\"hi\")");
    assert!(eval(r#"(get-property "missing" (1))"#).is_none());

    assert_failure(r#"(set-property number "three" (3))"#);
    assert_failure(r#"(set-property "number" "three")"#);
    assert_failure(r#"(get-property "number" "three" (3))"#);
    assert_failure("(get-property 1 (3))");
}

#[test]
fn properties_do_not_affect_equality() {
    let decorated = eval(r#"(set-property "tag" 1 (list 1 2))"#);
    assert_eq!(decorated, eval("(list 1 2)"));
}

#[test]
fn string_literals_evaluate_to_themselves() {
    assert_renders(r#"("hello world")"#, r#"("hello world")"#);
    assert_renders(r#"(list "a (b)" "c")"#, r#"(list "a (b)" "c")"#);
}

#[test]
fn rendering_round_trips() {
    for src in ["(list 1 2 (list 3 4))",
                r#"(list "x" 1.5 -2)"#,
                "(lambda (x y) (+ x y))",
                "(first (list 7))"]
    {
        let value = eval(src);
        let reparsed = parse_source(&value.to_string()).unwrap();
        assert_eq!(value, reparsed, "round trip of {src}");
    }

    let lambda = eval("(lambda (x y) (+ x y))");
    let mut reparsed = parse_source(&lambda.to_string()).unwrap();
    assert_eq!(reparsed.eval(&mut Environment::new()).unwrap(), lambda);
}

#[test]
fn complex_values_render_but_do_not_parse() {
    assert_renders("(I)", "(0,1)");
    assert_renders("(list 1 I)", "(list 1 0,1)");
    assert!(parse_source("(0,1)").is_err());
}

#[test]
fn faults_keep_earlier_bindings() {
    let mut interp = Interpreter::new();
    assert!(interp.run("(begin (define kept 1) (undefined))").is_err());
    assert_eq!(interp.run("(kept)").unwrap(), Expression::from(1.0));
}
