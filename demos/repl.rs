//! Basic pairlisp REPL over the default Environment.
//!
//! Run interactively as:   `RUST_LOG=info cargo run --example repl`.
//! Run a file as:          `cargo run --example repl -- path/to/file.lisp`.

use clap::{App, Arg};
use log::LevelFilter;

use pairlisp::prelude::*;
use pairlisp::printer::print_colored;


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("pairlisp REPL")
        .version("0.1")
        .about("Reads and evaluates pairlisp expressions one at a time")
        .arg(Arg::new("file").help("Source file; reads stdin if absent"))
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .takes_value(true)
                .help("Stream name used in error messages"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Don't color parentheses"),
        )
        .get_matches();

    if matches.is_present("no-color") {
        colored::control::set_override(false);
    }

    let env = default_environment().map_err(|err| err.to_string())?;
    match matches.value_of("file") {
        Some(path) => {
            let name = matches.value_of("name").unwrap_or(path);
            let input = ReadSource::open(path).map_err(|err| err.to_string())?;
            run(Interpreter::new(name, input, &env))
        }
        None => {
            let name = matches.value_of("name").unwrap_or("<stdin>");
            #[cfg(feature = "cli")]
            let input = pairlisp::source::InteractiveSource::new(&env);
            #[cfg(not(feature = "cli"))]
            let input = ReadSource::new(std::io::stdin());
            run(Interpreter::new(name, input, &env))
        }
    }
}

fn run<I: Iterator<Item = Result<u8, Error>>>(interpreter: Interpreter<'_, I>) -> Result<(), String> {
    for result in interpreter {
        match result {
            Ok(value) => {
                println!("Eval result: {:?}", value);
                print!("-> ");
                print_colored(&value).map_err(|err| err.to_string())?;
            }
            Err(err) if err.is_internal() => return Err(err.to_string()),
            Err(err) => println!("{}", err),
        }
    }
    Ok(())
}
