use std::fmt;


/// Text of a string literal, without its quotes and with escapes decoded.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LangString(String);

impl LangString {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    /// Decodes the body of a string literal (the text between its quotes).
    pub fn unescape<S: AsRef<str>>(body: S) -> Self {
        let mut out = String::with_capacity(body.as_ref().len());
        let mut escaped = false;
        for c in body.as_ref().chars() {
            if escaped {
                out.push(Self::unescape_char(c));
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else {
                out.push(c);
            }
        }
        Self(out)
    }

    pub fn unescape_char(c: char) -> char {
        match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            _ => c,
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}


/// Writes the string as a literal, quoted and re-escaped.
impl fmt::Display for LangString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.0.chars() {
            match c {
                '\n' => write!(f, "\\n")?,
                '\t' => write!(f, "\\t")?,
                '\r' => write!(f, "\\r")?,
                '\\' => write!(f, "\\\\")?,
                '"' => write!(f, "\\\"")?,
                _ => write!(f, "{}", c)?,
            }
        }
        write!(f, "\"")
    }
}


impl_try_from!(String -> LangString);
