use super::*;

use crate::builtins::default_environment;
use crate::error::ErrorKind;
use crate::parser::Parser;
use crate::primitive::{LangString, Procedure, ToSymbol};
use crate::source::StringSource;

fn eval_in(env: &Environment, input: &str) -> Result<Value, Error> {
    let mut parser = Parser::new("test", StringSource::new(input));
    let form = parser.next().unwrap()?;
    Evaluator::with_source(env, parser.source()).eval(&form)
}

fn eval(input: &str) -> Result<Value, Error> {
    eval_in(&default_environment().unwrap(), input)
}

#[test]
fn self_evaluating() {
    assert_eq!(eval("42").unwrap(), Value::Number(42));
    assert_eq!(eval("#t").unwrap(), Value::Boolean(true));
    assert_eq!(eval("\"s\"").unwrap(), Value::from(LangString::new("s")));
    assert_eq!(eval("()").unwrap(), Value::Null);
}

#[test]
fn symbol_lookup() {
    let mut env = Environment::new();
    env.insert("answer", 42i64).unwrap();
    assert_eq!(eval_in(&env, "answer").unwrap(), Value::Number(42));
}

#[test]
fn procedure_value() {
    match eval("+").unwrap() {
        Value::Procedure(procedure) => assert_eq!(procedure.name(), "+"),
        other => panic!("{:?}", other),
    }
}

#[test]
fn integer_fallback() {
    assert_eq!(eval("-4").unwrap(), Value::Number(-4));
    assert_eq!(eval("+7").unwrap(), Value::Number(7));
    assert_eq!(eval("(+ -4 10)").unwrap(), Value::Number(6));
}

#[test]
fn signed_literal_overflow() {
    assert_eq!(
        eval("-99999999999999999999").unwrap_err().to_string(),
        "test:1:1: invalid number -99999999999999999999"
    );
    assert_eq!(
        eval("(+ 1 +99999999999999999999)").unwrap_err().to_string(),
        "test:1:6: invalid number +99999999999999999999"
    );
    // Not a signed digit run, so just unbound.
    assert_eq!(
        eval("-9x").unwrap_err().to_string(),
        "test:1:1: unbound variable -9x"
    );
}

#[test]
fn bound_name_shadows_fallback() {
    let mut env = Environment::new();
    env.insert("-4", 4i64).unwrap();
    assert_eq!(eval_in(&env, "-4").unwrap(), Value::Number(4));
}

#[test]
fn unbound_variable() {
    let err = eval("  undefined-name").unwrap_err();
    assert_eq!(
        err.kind().reify(),
        EvalError::UnboundVariable("undefined-name".to_symbol()).reify()
    );
    assert_eq!(err.to_string(), "test:1:3: unbound variable undefined-name");
}

#[test]
fn unbound_variable_in_arguments() {
    let err = eval("(+ 1\n  nope)").unwrap_err();
    assert_eq!(err.to_string(), "test:2:3: unbound variable nope");
}

#[test]
fn quoted_unbound() {
    assert_eq!(
        eval("'undefined-name").unwrap(),
        Value::from("undefined-name".to_symbol())
    );
}

#[test]
fn wrong_type_to_apply() {
    let err = eval("(1 2)").unwrap_err();
    assert_eq!(
        err.kind().reify(),
        EvalError::WrongTypeToApply(Value::Number(1)).reify()
    );
    assert_eq!(err.to_string(), "test:1:1: wrong type to apply: 1");
}

#[test]
fn arguments_evaluated_in_order() {
    fn second(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
        let (_, b) = break_list!(args => (&Value, &Value))?;
        Ok(b.clone())
    }

    let mut env = default_environment().unwrap();
    env.define(Procedure::new("second", second)).unwrap();
    assert_eq!(
        eval_in(&env, "(second (+ 1 1) (* 2 2))").unwrap(),
        Value::Number(4)
    );
    // The first failing argument is reported.
    assert_eq!(
        eval_in(&env, "(second a b)").unwrap_err().to_string(),
        "test:1:9: unbound variable a"
    );
}

#[test]
fn eval_arguments_tail() {
    let env = default_environment().unwrap();
    let mut evaluator = Evaluator::new(&env);
    let args = Value::cons(1i64, Value::cons("-2".to_symbol(), 3i64));
    assert_eq!(
        evaluator.eval_arguments(&args).unwrap(),
        Value::cons(1i64, Value::cons(-2i64, 3i64))
    );
    assert_eq!(evaluator.eval_arguments(&Value::Null).unwrap(), Value::Null);
}

#[test]
fn special_form_receives_unevaluated() {
    fn first(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
        let (a, _) = break_list!(args => (&Value, &Value))?;
        Ok(a.clone())
    }

    let mut env = Environment::new();
    env.define(Procedure::special_form("first", first)).unwrap();
    assert_eq!(
        eval_in(&env, "(first x y)").unwrap(),
        Value::from("x".to_symbol())
    );
}

#[test]
fn procedure_uses_evaluator() {
    fn eval_twice(args: &Value, evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
        let (form,) = break_list!(args => (&Value))?;
        let once = evaluator.eval(form)?;
        evaluator.eval(&once)
    }

    let mut env = default_environment().unwrap();
    env.define(Procedure::new("eval-twice", eval_twice)).unwrap();
    assert_eq!(
        eval_in(&env, "(eval-twice '(+ 1 2))").unwrap(),
        Value::Number(3)
    );
}

#[test]
fn unlocated_without_source() {
    let env = Environment::new();
    let err = Evaluator::new(&env)
        .eval(&Value::from("nope".to_symbol()))
        .unwrap_err();
    assert!(err.location().is_none());
    assert_eq!(err.to_string(), "unbound variable nope");
}
