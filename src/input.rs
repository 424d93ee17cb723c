//! Reading lines, words and values from any buffered reader.

use std::collections::BTreeMap;
use std::io::BufRead;

use tracing::debug;

use crate::exceptions::{Exception, InvalidArgument};
use crate::tour::{TourError, Transcript};

/// The most characters a bounded line read keeps.
pub const MAX_LINE: usize = 9;

/// Reads one line without its terminator. Returns `None` at the end of the input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, TourError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Reads one whitespace separated word, skipping blank lines.
pub fn read_word<R: BufRead>(input: &mut R) -> Result<Option<String>, TourError> {
    while let Some(line) = read_line(input)? {
        if let Some(word) = line.split_whitespace().next() {
            return Ok(Some(word.to_string()));
        }
    }
    Ok(None)
}

pub fn get_line<R: BufRead>(input: &mut R, out: &mut Transcript) -> Result<(), TourError> {
    out.raw(format_args!("Enter a string of not more than {MAX_LINE} characters: "))?;
    let line = read_line(input)?.unwrap_or_default();
    let bounded: String = line.chars().take(MAX_LINE).collect();
    out.raw(format_args!("The string '{bounded}' has {} characters.", bounded.chars().count()))?;
    out.newline()?;

    out.raw("Enter a string: ")?;
    let line = read_line(input)?.unwrap_or_default();
    out.raw(format_args!(
        "The string '{line}' has {} characters and its size is {}.",
        line.chars().count(),
        line.len()
    ))?;
    out.newline()?;

    out.raw("Enter a string up to the first whitespace: ")?;
    let word = read_word(input)?.unwrap_or_default();
    out.raw(format_args!("The string '{word}' has {} characters.", word.chars().count()))?;
    out.newline()?;
    Ok(())
}

/// Reads three integers, which may be spread over several lines.
pub fn get_values<R: BufRead>(input: &mut R, out: &mut Transcript) -> Result<[i32; 3], TourError> {
    out.raw("Enter three integer values: ")?;
    let mut values = Vec::with_capacity(3);
    while values.len() < 3 {
        let Some(line) = read_line(input)? else {
            return Err(Exception::from(InvalidArgument::new("expected three integer values")).into());
        };
        for word in line.split_whitespace().take(3 - values.len()) {
            let value = word
                .parse::<i32>()
                .map_err(|_| Exception::from(InvalidArgument::new(format!("'{word}' is not an integer"))))?;
            values.push(value);
        }
    }
    let [a, b, c] = [values[0], values[1], values[2]];
    out.raw(format_args!("You entered: {a}, {b}, {c}"))?;
    out.newline()?;
    Ok([a, b, c])
}

/// Waits for the next line and echoes its first character.
pub fn wait_for_key<R: BufRead>(input: &mut R, out: &mut Transcript) -> Result<Option<char>, TourError> {
    out.raw("Press enter...")?;
    out.newline()?;
    let key = read_line(input)?.and_then(|line| line.chars().next());
    if let Some(key) = key {
        out.raw(format_args!("You entered {key}"))?;
        out.newline()?;
    }
    Ok(key)
}

/// Counts how often each whitespace separated word of `input` occurs, ordered by word.
pub fn histogram<R: BufRead>(input: &mut R) -> Result<BTreeMap<String, usize>, TourError> {
    let mut counts = BTreeMap::new();
    while let Some(line) = read_line(input)? {
        for word in line.split_whitespace() {
            *counts.entry(word.to_string()).or_default() += 1;
        }
    }
    debug!(distinct = counts.len(), "counted words");
    Ok(counts)
}

pub fn print_histogram(out: &mut Transcript, counts: &BTreeMap<String, usize>) -> Result<(), TourError> {
    for (word, count) in counts {
        out.token(format_args!("{word}:{count}"))?;
    }
    Ok(())
}

/// Runs the prompts against `input`, then counts the words of whatever is left.
pub fn run_with<R: BufRead>(input: &mut R, out: &mut Transcript) -> Result<(), TourError> {
    get_line(input, out)?;
    get_values(input, out)?;
    wait_for_key(input, out)?;
    let counts = histogram(input)?;
    print_histogram(out, &counts)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_get_line() {
        let mut input = Cursor::new("abcdefghijkl\nżółw\r\n\n  first second\n");
        let mut out = Transcript::new();
        get_line(&mut input, &mut out).unwrap();
        let lines: Vec<&str> = out.as_str().lines().collect();
        assert_eq!(lines[0], "Enter a string of not more than 9 characters: The string 'abcdefghi' has 9 characters.");
        assert_eq!(lines[1], "Enter a string: The string 'żółw' has 4 characters and its size is 7.");
        assert_eq!(
            lines[2],
            "Enter a string up to the first whitespace: The string 'first' has 5 characters.",
            "Blank lines should be skipped when reading a word!"
        );
    }

    #[test]
    fn test_get_values() {
        let mut input = Cursor::new("1 2\n3 4\n");
        let mut out = Transcript::new();
        assert_eq!(get_values(&mut input, &mut out).unwrap(), [1, 2, 3]);
        assert!(out.as_str().ends_with("You entered: 1, 2, 3\n"));
    }

    #[test]
    fn test_get_values_errors() {
        let mut out = Transcript::new();
        let err = get_values(&mut Cursor::new("1 x 3\n"), &mut out).unwrap_err();
        assert!(matches!(err, TourError::Exception(ref e) if e.is_logic()), "Got {err:?}");

        let err = get_values(&mut Cursor::new("1 2\n"), &mut out).unwrap_err();
        assert!(matches!(err, TourError::Exception(_)), "Running out of input should fail, got {err:?}");
    }

    #[test]
    fn test_histogram() {
        let mut input = Cursor::new("to be or\nnot to be\n");
        let counts = histogram(&mut input).unwrap();
        let mut out = Transcript::new();
        print_histogram(&mut out, &counts).unwrap();
        assert_eq!(out.as_str(), "be:2 not:1 or:1 to:2 ");
    }

    #[test]
    fn test_run_with() {
        let mut input = Cursor::new("short\nline two\nword\n7 8 9\nq\nb a b\n");
        let mut out = Transcript::new();
        run_with(&mut input, &mut out).unwrap();
        assert!(out.as_str().contains("You entered q\n"));
        assert!(out.as_str().ends_with("a:1 b:2 "));
    }
}
