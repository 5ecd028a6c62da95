//! Native procedures making up the default Environment.

use crate::environment::Environment;
use crate::error::Error;
use crate::eval_error::{EvalError, ExpectedCount};
use crate::evaluator::Evaluator;
use crate::primitive::Procedure;
use crate::value::{Pair, Value};


macro_rules! builtins {
    [$env:expr; $($name:literal => $fun:expr),+ $(,)?] => {
        $(
            $env.define(Procedure::new($name, $fun))?;
        )+
    };
}

/// Environment holding every builtin procedure.
pub fn default_environment() -> Result<Environment, Error> {
    let mut env = Environment::new();
    builtins![env;
        "+" => add,
        "-" => sub,
        "*" => mul,
        "/" => div,
        "cons" => cons,
        "car" => car,
        "cdr" => cdr,
        "list" => list,
        "eq?" => eq,
    ];
    env.define(Procedure::special_form("quote", quote))?;
    Ok(env)
}


/// Numbers of a proper argument list.
fn numbers(args: &Value) -> Result<Vec<i64>, Error> {
    let mut nums = Vec::new();
    for (arg, proper) in args {
        if !proper {
            return Err(EvalError::MalformedList(args.clone()).into());
        }
        match arg {
            Value::Number(num) => nums.push(*num),
            _ => {
                return Err(EvalError::WrongArgumentType {
                    expected: "Number".into(),
                    given: arg.clone(),
                }
                .into());
            }
        }
    }
    Ok(nums)
}

fn at_least_one(nums: &[i64]) -> Result<(i64, &[i64]), Error> {
    match nums.split_first() {
        Some((first, rest)) => Ok((*first, rest)),
        None => Err(EvalError::WrongArgumentCount {
            given: 0,
            expected: ExpectedCount::AtLeast(1),
        }
        .into()),
    }
}

fn overflow() -> Error {
    EvalError::Overflow.into()
}


pub fn add(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    let mut curr: i64 = 0;
    for num in numbers(args)? {
        curr = curr.checked_add(num).ok_or_else(overflow)?;
    }
    Ok(curr.into())
}

pub fn sub(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    let nums = numbers(args)?;
    let (first, rest) = at_least_one(&nums)?;
    if rest.is_empty() {
        return Ok(first.checked_neg().ok_or_else(overflow)?.into());
    }

    let mut curr = first;
    for num in rest {
        curr = curr.checked_sub(*num).ok_or_else(overflow)?;
    }
    Ok(curr.into())
}

pub fn mul(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    let mut curr: i64 = 1;
    for num in numbers(args)? {
        curr = curr.checked_mul(num).ok_or_else(overflow)?;
    }
    Ok(curr.into())
}

pub fn div(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    let nums = numbers(args)?;
    let (first, rest) = at_least_one(&nums)?;

    let mut curr = first;
    for num in rest {
        if *num == 0 {
            return Err(EvalError::DivisionByZero.into());
        }
        curr = curr.checked_div(*num).ok_or_else(overflow)?;
    }
    Ok(curr.into())
}

pub fn quote(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    let (quoted,) = break_list!(args => (&Value))?;
    Ok(quoted.clone())
}

pub fn cons(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    let (car, cdr) = break_list!(args => (&Value, &Value))?;
    Ok(Value::cons(car.clone(), cdr.clone()))
}

pub fn car(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    let (pair,) = break_list!(args => (&Pair))?;
    Ok(pair.car().clone())
}

pub fn cdr(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    let (pair,) = break_list!(args => (&Pair))?;
    Ok(pair.cdr().clone())
}

pub fn list(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    if !args.is_proper_list() {
        return Err(EvalError::MalformedList(args.clone()).into());
    }
    Ok(args.clone())
}

pub fn eq(args: &Value, _evaluator: &mut Evaluator<'_>) -> Result<Value, Error> {
    let (a, b) = break_list!(args => (&Value, &Value))?;
    Ok((a == b).into())
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
