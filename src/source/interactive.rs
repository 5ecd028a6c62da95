use log::debug;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::collections::VecDeque;

use crate::environment::Environment;
use crate::error::Error;
use crate::std_error::StdError;


/// Bytes typed at a line editor, each line followed by '\n'.
pub struct InteractiveSource {
    editor: Editor<NameCompleter>,
    prompt: String,
    pending: VecDeque<u8>,
}

/// Rustyline Helper completing names bound in an Environment.
pub struct NameCompleter {
    names: Vec<String>,
}


impl InteractiveSource {
    pub fn new(env: &Environment) -> Self {
        let mut editor = Editor::<NameCompleter>::new();
        editor.set_helper(Some(NameCompleter::new(env)));

        Self {
            editor,
            prompt: "> ".to_string(),
            pending: Default::default(),
        }
    }

    pub fn with_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = prompt.into();
        self
    }
}

impl Iterator for InteractiveSource {
    type Item = Result<u8, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.pending.pop_front() {
                return Some(Ok(c));
            }

            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    self.editor.add_history_entry(line.as_str());
                    self.pending.extend(line.bytes());
                    self.pending.push_back(b'\n');
                }
                Err(ReadlineError::Interrupted) => {
                    debug!("Ignoring interrupt");
                    continue;
                }
                Err(ReadlineError::Eof) => return None,
                Err(err) => {
                    return Some(Err(Error::new(Box::new(StdError::Readline(
                        err.to_string(),
                    )))));
                }
            }
        }
    }
}


impl NameCompleter {
    pub fn new(env: &Environment) -> Self {
        let mut names = env.names().map(|s| s.to_string()).collect::<Vec<_>>();
        names.sort();
        Self { names }
    }

    fn is_name_byte(c: u8) -> bool {
        !(c.is_ascii_whitespace() || matches!(c, b'(' | b')' | b'\'' | b'"' | b';'))
    }
}

impl Completer for NameCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let bytes = line.as_bytes();
        let mut start = pos;
        while start > 0 && Self::is_name_byte(bytes[start - 1]) {
            start -= 1;
        }

        let prefix = &line[start..pos];
        let candidates = self
            .names
            .iter()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for NameCompleter {
    type Hint = String;
}

impl Highlighter for NameCompleter {}

impl Validator for NameCompleter {}

impl Helper for NameCompleter {}
