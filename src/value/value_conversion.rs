/// Breaks a list Value into Result<tuple of component refs, Error>, assuming
/// all component types implement TryFrom<&Value>.
///
/// Too few or too many elements are a wrong argument count; a dotted tail is a
/// malformed list; an element of the wrong variant is a wrong argument type.
///
/// Example:
///  let (a, b) = break_list!(args => (&Symbol, &Value))?;
#[macro_export]
macro_rules! break_list {
    (@one $_ignored:ty) => {
        1
    };
    ($value:expr => ($($type:ty),+ $(,)?)) => {
        {
            use $crate::eval_error::{EvalError, ExpectedCount};

            let value: &$crate::value::Value = $value;
            let mut iter = value.iter();
            let mut tuple = || -> Result<_, $crate::error::Error> {
                let expected: usize = 0 $(+ $crate::break_list!(@one $type))+;
                let mut given: usize = 0;
                let ret = ($(
                    match iter.next() {
                        Some((elem, true)) => {
                            given += 1;
                            <$type as std::convert::TryFrom<_>>::try_from(elem)?
                        }
                        Some(_) => {
                            return Err(EvalError::MalformedList(value.clone()).into());
                        }
                        None => {
                            return Err(EvalError::WrongArgumentCount {
                                given,
                                expected: ExpectedCount::Exactly(expected),
                            }.into());
                        }
                    },
                )+);

                if let Some((_, proper)) = iter.next() {
                    if !proper {
                        return Err(EvalError::MalformedList(value.clone()).into());
                    }
                    return Err(EvalError::WrongArgumentCount {
                        given: given + 1 + iter.by_ref().count(),
                        expected: ExpectedCount::Exactly(expected),
                    }.into());
                }
                Ok(ret)
            };

            tuple()
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! list_inner {
    () => { $crate::value::Value::Null };
    (@cons $car:expr, $cdr:expr) => {
        $crate::value::Value::cons($car, $cdr)
    };
    (($elem:expr, $($sub_tail:tt)*), $($tail:tt)*) => {
        {
            $crate::list_inner!(@cons
                $crate::list_inner!(@cons $elem, $crate::list_inner!($($sub_tail)*)),
                $crate::list_inner!($($tail)*))
        }
    };
    ($elem:expr, $($tail:tt)*) => {
        {
            $crate::list_inner!(@cons $elem, $crate::list_inner!($($tail)*))
        }
    };
}

/// Returns the elements as a proper list Value.
///
/// Provided elements must implement Into<Value>.
/// Trailing commas currently must be used.
///
/// Example:
///   list!(a, b, (c, (d,),), e,)
#[macro_export]
macro_rules! list {
    ($($tail:tt)*) => {
        $crate::list_inner!($($tail)*)
    }
}


#[cfg(test)]
#[path = "./value_conversion_test.rs"]
mod value_conversion_test;
