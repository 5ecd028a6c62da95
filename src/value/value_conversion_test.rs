use crate::error::{Error, ErrorKind};
use crate::eval_error::{EvalError, ExpectedCount};
use crate::primitive::{LangString, Symbol, ToSymbol};
use crate::value::{Pair, Value};

fn kind(err: Error) -> Value {
    err.kind().reify()
}

#[test]
fn list_macro() {
    assert_eq!(list!(), Value::Null);
    assert_eq!(list!(1i64,), Value::cons(1i64, Value::Null));
    assert_eq!(
        list!(1i64, (2i64, 3i64,), "a".to_symbol(),).to_string(),
        "(1 (2 3) a)"
    );
}

#[test]
fn break_list() {
    let value = list!("f".to_symbol(), 2i64, LangString::new("s"),);
    let (symbol, num, s) = break_list!(&value => (&Symbol, &i64, &LangString)).unwrap();
    assert_eq!(symbol.as_str(), "f");
    assert_eq!(*num, 2);
    assert_eq!(s.as_str(), "s");
}

#[test]
fn break_list_pair() {
    let value = list!((1i64, 2i64,),);
    let (pair,) = break_list!(&value => (&Pair)).unwrap();
    assert_eq!(*pair.car(), Value::Number(1));
}

#[test]
fn break_list_too_few() {
    let value = list!(1i64,);
    let err = break_list!(&value => (&i64, &i64)).unwrap_err();
    assert_eq!(
        kind(err),
        EvalError::WrongArgumentCount {
            given: 1,
            expected: ExpectedCount::Exactly(2),
        }
        .reify()
    );
}

#[test]
fn break_list_too_many() {
    let value = list!(1i64, 2i64, 3i64,);
    let err = break_list!(&value => (&i64)).unwrap_err();
    assert_eq!(
        kind(err),
        EvalError::WrongArgumentCount {
            given: 3,
            expected: ExpectedCount::Exactly(1),
        }
        .reify()
    );
}

#[test]
fn break_list_wrong_type() {
    let value = list!(1i64, "a".to_symbol(),);
    let err = break_list!(&value => (&i64, &i64)).unwrap_err();
    assert_eq!(
        kind(err),
        EvalError::WrongArgumentType {
            expected: "Number".into(),
            given: "a".to_symbol().into(),
        }
        .reify()
    );
}

#[test]
fn break_list_dotted() {
    let value = Value::cons(1i64, 2i64);
    let err = break_list!(&value => (&i64, &i64)).unwrap_err();
    assert_eq!(kind(err), EvalError::MalformedList(value.clone()).reify());

    let err = break_list!(&value => (&i64)).unwrap_err();
    assert_eq!(kind(err), EvalError::MalformedList(value).reify());
}
