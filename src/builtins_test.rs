use super::*;

use crate::error::ErrorKind;
use crate::parser::Parser;
use crate::primitive::ToSymbol;
use crate::source::StringSource;

fn eval(input: &str) -> Result<Value, Error> {
    let env = default_environment().unwrap();
    let mut parser = Parser::new("test", StringSource::new(input));
    let form = parser.next().unwrap()?;
    Evaluator::with_source(&env, parser.source()).eval(&form)
}

fn eval_kind(input: &str) -> Value {
    eval(input).unwrap_err().kind().reify()
}

#[test]
fn arithmetic() {
    assert_eq!(eval("(+ 1 2 3)").unwrap(), Value::Number(6));
    assert_eq!(eval("(+)").unwrap(), Value::Number(0));
    assert_eq!(eval("(- 10 3 2)").unwrap(), Value::Number(5));
    assert_eq!(eval("(- 4)").unwrap(), Value::Number(-4));
    assert_eq!(eval("(* 2 3 4)").unwrap(), Value::Number(24));
    assert_eq!(eval("(*)").unwrap(), Value::Number(1));
    assert_eq!(eval("(/ 20 2 3)").unwrap(), Value::Number(3));
    assert_eq!(eval("(/ 7)").unwrap(), Value::Number(7));
    assert_eq!(eval("(+ 1 (* 2 3) (- 1))").unwrap(), Value::Number(6));
}

#[test]
fn arithmetic_argument_count() {
    let expected = EvalError::WrongArgumentCount {
        given: 0,
        expected: ExpectedCount::AtLeast(1),
    };
    assert_eq!(eval_kind("(-)"), expected.reify());
    assert_eq!(eval_kind("(/)"), expected.reify());
}

#[test]
fn arithmetic_wrong_type() {
    let err = eval("(+ 1 \"x\")").unwrap_err();
    assert_eq!(
        err.to_string(),
        "test:1:1: wrong argument type: expected Number, given String \"x\""
    );
}

#[test]
fn arithmetic_malformed() {
    assert_eq!(
        eval_kind("(+ 1 . 2)"),
        EvalError::MalformedList(Value::cons(1i64, 2i64)).reify()
    );
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_kind("(/ 1 0)"), EvalError::DivisionByZero.reify());
}

#[test]
fn overflow() {
    assert_eq!(
        eval_kind("(+ 9223372036854775807 1)"),
        EvalError::Overflow.reify()
    );
    assert_eq!(
        eval_kind("(- -9223372036854775807 2)"),
        EvalError::Overflow.reify()
    );
    assert_eq!(
        eval_kind("(* 4611686018427387904 2)"),
        EvalError::Overflow.reify()
    );
}

#[test]
fn quote() {
    assert_eq!(eval("(quote a)").unwrap(), Value::from("a".to_symbol()));
    assert_eq!(eval("'(1 b)").unwrap(), list!(1i64, "b".to_symbol(),));
    assert_eq!(
        eval_kind("(quote a b)"),
        EvalError::WrongArgumentCount {
            given: 2,
            expected: ExpectedCount::Exactly(1),
        }
        .reify()
    );
}

#[test]
fn pairs() {
    assert_eq!(eval("(cons 1 2)").unwrap(), Value::cons(1i64, 2i64));
    assert_eq!(eval("(car '(1 2))").unwrap(), Value::Number(1));
    assert_eq!(eval("(cdr '(1 2))").unwrap(), list!(2i64,));
    assert_eq!(eval("(cdr '(1 . 2))").unwrap(), Value::Number(2));
    assert_eq!(eval("(list 1 (+ 1 1) 'c)").unwrap(), eval("'(1 2 c)").unwrap());
    assert_eq!(eval("(list)").unwrap(), Value::Null);
}

#[test]
fn car_of_non_pair() {
    assert_eq!(
        eval_kind("(car 1)"),
        EvalError::WrongArgumentType {
            expected: "Pair".into(),
            given: Value::Number(1),
        }
        .reify()
    );
    assert!(eval("(cdr '())").is_err());
}

#[test]
fn equality() {
    assert_eq!(eval("(eq? 'a 'a)").unwrap(), Value::Boolean(true));
    assert_eq!(eval("(eq? '(1 2) (list 1 2))").unwrap(), Value::Boolean(true));
    assert_eq!(eval("(eq? 1 2)").unwrap(), Value::Boolean(false));
    assert_eq!(eval("(eq? #t #t)").unwrap(), Value::Boolean(true));
}
