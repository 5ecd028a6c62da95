use super::*;

use crate::eval_error::EvalError;
use crate::primitive::ToSymbol;
use std::convert::TryFrom;

fn sym(name: &str) -> Value {
    name.to_symbol().into()
}

#[test]
fn display() {
    let value: Value = "(1 (2 . 3) \"a\\nb\" #t #f ())".parse().unwrap();
    assert_eq!(value.to_string(), "(1 (2 . 3) \"a\\nb\" #t #f ())");
    assert_eq!(Value::Null.to_string(), "()");
}

#[test]
fn display_quote() {
    let value: Value = "(quote (a 'b))".parse().unwrap();
    assert_eq!(value.to_string(), "'(a 'b)");
    // Not shorthand unless exactly one quoted element.
    let value: Value = "(quote a b)".parse().unwrap();
    assert_eq!(value.to_string(), "(quote a b)");
}

#[test]
fn debug() {
    assert_eq!(format!("{:?}", Value::Number(6)), "ValNumber<6>");
    assert_eq!(format!("{:?}", Value::Null), "<()>");
    assert_eq!(format!("{:?}", sym("a")), "ValSymbol<a>");
    assert_eq!(
        format!("{:?}", Value::from(LangString::new("x"))),
        "ValString<\"x\">"
    );
    assert_eq!(format!("{:?}", Value::Boolean(true)), "ValBoolean<#t>");
    assert_eq!(format!("{:?}", Value::Character('c')), "ValCharacter<c>");
    assert_eq!(
        format!("{:?}", Value::cons(sym("a"), sym("b"))),
        "ValPair<(ValSymbol<a> . ValSymbol<b>)>"
    );
    assert_eq!(
        format!("{:?}", list!(1i64,)),
        "ValPair<(ValNumber<1> . <()>)>"
    );
    assert_eq!(
        format!("{:?}", Value::cons(1i64, list!(2i64,))),
        "ValPair<(ValNumber<1> . ValPair<(ValNumber<2> . <()>)>)>"
    );
}

#[test]
fn debug_long_list() {
    let list = (0..200_000i64).map(Value::Number).collect::<Value>();
    let printed = format!("{:?}", list);
    assert!(printed.starts_with("ValPair<(ValNumber<0> . ValPair<(ValNumber<1> . "));
    assert!(printed.ends_with("ValNumber<199999> . <()>)>)>"));
    // One per cell, plus the closing of the "<()>" tail.
    assert_eq!(printed.matches(")>").count(), 200_001);
}

#[test]
fn iter() {
    let value: Value = "(1 2 . 3)".parse().unwrap();
    let items = value
        .iter()
        .map(|(v, proper)| (v.clone(), proper))
        .collect::<Vec<_>>();
    assert_eq!(
        items,
        vec![
            (Value::Number(1), true),
            (Value::Number(2), true),
            (Value::Number(3), false),
        ]
    );
    assert!(!value.is_proper_list());
    assert!(Value::Null.is_proper_list());
    assert_eq!(Value::Null.iter().count(), 0);
}

#[test]
fn equality_ignores_offsets() {
    let parsed: Value = "  (a b)".parse().unwrap();
    assert_eq!(parsed, list!(sym("a"), sym("b"),));
    assert_ne!(parsed, list!(sym("a"), sym("c"),));
}

#[test]
fn quoted() {
    let value: Value = "'x".parse().unwrap();
    assert_eq!(value.quoted(), Some(&sym("x")));
    assert_eq!(sym("x").quoted(), None);
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "Null");
    assert_eq!(Value::Number(1).type_name(), "Number");
    assert_eq!(Value::cons(1i64, 2i64).type_name(), "Pair");
    assert_eq!(Value::from(LangString::new("")).type_name(), "String");
}

#[test]
fn try_from() {
    assert_eq!(<&i64>::try_from(&Value::Number(3)), Ok(&3));
    assert_eq!(
        <&i64>::try_from(&Value::Null),
        Err(EvalError::WrongArgumentType {
            expected: "Number".into(),
            given: Value::Null,
        })
    );
    assert_eq!(<&bool>::try_from(&Value::Boolean(true)), Ok(&true));
    let symbol = sym("s");
    assert_eq!(<&Symbol>::try_from(&symbol).map(|s| s.as_str()), Ok("s"));
    let pair = Value::cons(1i64, 2i64);
    assert_eq!(<&Pair>::try_from(&pair).map(Pair::cdr), Ok(&Value::Number(2)));
    assert!(<&Pair>::try_from(&symbol).is_err());
}

#[test]
fn from_str_empty() {
    assert_eq!("".parse::<Value>().unwrap(), Value::Null);
    assert!("(".parse::<Value>().is_err());
}
