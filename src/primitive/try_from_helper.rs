/// Impls TryFrom<&Value> for references to the payloads of Value variants.
///
/// A mismatch is a wrong argument type naming the expected variant, which
/// is what break_list! reports for the element.
///
/// Example:
///   impl_try_from!(Number -> i64, String -> LangString);
macro_rules! impl_try_from {
    ($($variant:ident -> $to:ty),+ $(,)?) => {
        $(
            impl<'a> std::convert::TryFrom<&'a $crate::value::Value> for &'a $to {
                type Error = $crate::eval_error::EvalError;

                fn try_from(value: &'a $crate::value::Value) -> Result<Self, Self::Error> {
                    match value {
                        $crate::value::Value::$variant(val) => Ok(val),
                        _ => Err($crate::eval_error::EvalError::WrongArgumentType {
                            expected: stringify!($variant).into(),
                            given: value.clone(),
                        }),
                    }
                }
            }
        )+
    };
}
