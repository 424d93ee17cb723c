use std::fmt::{self, Display, Write};

/// The append-only text a topic produces.
///
/// Topics never write to standard output themselves. They push short tokens into a Transcript and
/// the driver decides where the text ends up, which keeps every topic testable on its own.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    buf: String,
}

impl Transcript {
    pub const fn new() -> Transcript {
        Transcript {
            buf: String::new(),
        }
    }

    /// Writes `value` followed by a single space, the separator every topic uses between tokens.
    pub fn token<T: Display>(&mut self, value: T) -> fmt::Result {
        write!(self.buf, "{value} ")
    }

    /// Writes each item of `values` as a token.
    pub fn tokens<I>(&mut self, values: I) -> fmt::Result
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for value in values {
            self.token(value)?;
        }
        Ok(())
    }

    /// Writes `value` with no trailing separator.
    pub fn raw<T: Display>(&mut self, value: T) -> fmt::Result {
        write!(self.buf, "{value}")
    }

    pub fn newline(&mut self) -> fmt::Result {
        self.buf.write_char('\n')
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Iterates over the whitespace separated words written so far.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.buf.split_whitespace()
    }
}

impl Write for Transcript {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
