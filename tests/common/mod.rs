use pairlisp::prelude::*;


pub fn setup() -> Result<Environment, String> {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    default_environment().map_err(|err| format!("{}", err))
}

pub fn results<S: AsRef<str>>(env: &Environment, s: S) -> Vec<Value> {
    results_with_errors(env, s)
        .into_iter()
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

pub fn results_with_errors<S: AsRef<str>>(env: &Environment, s: S) -> Vec<Result<Value, Error>> {
    Interpreter::new("test", StringSource::new(s.as_ref()), env).collect::<Vec<_>>()
}

/// Formatted errors, in order.
#[allow(dead_code)]
pub fn error_messages<S: AsRef<str>>(env: &Environment, s: S) -> Vec<String> {
    results_with_errors(env, s)
        .into_iter()
        .filter_map(Result::err)
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
}
