//! Searching with capture groups, rewriting a match with a format string and iterating over
//! every match of a pattern.

use regex::{Captures, Regex};

use crate::tour::{FAILURE_MARKER, TourError, Transcript};

/// The first match of `pattern` in `text` as `(length, text)` pairs: the whole match first, then
/// each group. Groups that took no part in the match come back empty. No match gives no pairs.
pub fn search_submatches<'t>(text: &'t str, pattern: &str) -> Result<Vec<(usize, &'t str)>, regex::Error> {
    let re = Regex::new(pattern)?;
    let Some(caps) = re.captures(text) else {
        return Ok(Vec::new());
    };
    Ok(caps
        .iter()
        .map(|group| group.map_or((0, ""), |m| (m.len(), m.as_str())))
        .collect())
}

/// Expands `fmt` against a match found in `text`.
///
/// | Sequence | Expands to                                      |
/// | -------- | ----------------------------------------------- |
/// | `$&`     | the whole match                                 |
/// | `` $` `` | the text before the match                       |
/// | `$'`     | the text after the match                        |
/// | `$n`     | group `n`, taking two digits when that group exists |
/// | `$$`     | a literal `$`                                   |
///
/// Any other `$` is copied as is.
pub fn format_match(caps: &Captures<'_>, text: &str, fmt: &str) -> String {
    let whole = caps.get(0);
    let (start, end) = whole.map_or((0, 0), |m| (m.start(), m.end()));
    let group = |index: usize| caps.get(index).map_or("", |m| m.as_str());

    let mut result = String::with_capacity(fmt.len());
    let mut rest = fmt;
    while let Some(pos) = rest.find('$') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let mut chars = after.chars();
        let consumed = match chars.next() {
            Some('&') => {
                result.push_str(group(0));
                1
            },
            Some('`') => {
                result.push_str(&text[..start]);
                1
            },
            Some('\'') => {
                result.push_str(&text[end..]);
                1
            },
            Some('$') => {
                result.push('$');
                1
            },
            Some(first) if first.is_ascii_digit() => {
                let one = first as usize - '0' as usize;
                let two = chars
                    .next()
                    .filter(char::is_ascii_digit)
                    .map(|second| one * 10 + (second as usize - '0' as usize))
                    .filter(|&two| two < caps.len());
                match two {
                    Some(two) => {
                        result.push_str(group(two));
                        2
                    },
                    None => {
                        result.push_str(group(one));
                        1
                    },
                }
            },
            _ => {
                result.push('$');
                0
            },
        };
        rest = &after[consumed..];
    }
    result.push_str(rest);
    result
}

/// Every non-overlapping match of `pattern` in `text`, left to right.
pub fn all_matches<'t>(text: &'t str, pattern: &str) -> Result<Vec<&'t str>, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(re.find_iter(text).map(|m| m.as_str()).collect())
}

fn check(out: &mut Transcript, condition: bool) -> Result<(), TourError> {
    if !condition {
        out.token(FAILURE_MARKER)?;
    }
    Ok(())
}

fn search(out: &mut Transcript) -> Result<(), TourError> {
    let s = "AAA 808-2321 BBB";
    let pattern = r"(\d{3})-(\d{4})";

    let submatches = search_submatches(s, pattern)?;
    check(out, !submatches.is_empty())?;
    for (len, text) in submatches {
        out.token(format_args!("{len}:{text}"))?;
    }

    let re = Regex::new(pattern)?;
    if let Some(caps) = re.captures(s) {
        out.token(format_match(&caps, s, "$`<$1 $2>$'"))?;
    }
    Ok(())
}

fn iterate(out: &mut Transcript) -> Result<(), TourError> {
    let s = "a.h qq <abc.cc> abc a,h ddd.exe <bb.exe > <s.d> dd..t <www.txt>";
    for m in all_matches(s, r"<\w+\.\w{2,3}>")? {
        out.token(format_args!("{}:{m}", m.len()))?;
    }
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    search(out)?;
    iterate(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(text: &str, pattern: &str, fmt: &str) -> String {
        let re = Regex::new(pattern).unwrap();
        let caps = re.captures(text).unwrap();
        format_match(&caps, text, fmt)
    }

    #[test]
    fn test_submatches() {
        let found = search_submatches("x 12-345 y", r"(\d+)-(\d+)(z)?").unwrap();
        assert_eq!(found, [(6, "12-345"), (2, "12"), (3, "345"), (0, "")]);
        assert!(search_submatches("nothing", r"\d").unwrap().is_empty());
        assert!(search_submatches("", "(").is_err(), "An unbalanced group should not compile!");
    }

    #[test]
    fn test_format_sequences() {
        assert_eq!(expand("ab-cd", "(b)-(c)", "[$&]"), "[b-c]");
        assert_eq!(expand("ab-cd", "(b)-(c)", "$`|$'"), "a|d");
        assert_eq!(expand("ab-cd", "(b)-(c)", "$2$1"), "cb");
        assert_eq!(expand("ab-cd", "(b)-(c)", "$$1"), "$1");
        assert_eq!(expand("ab-cd", "(b)-(c)", "$12"), "b2", "Group 12 doesn't exist, so only one digit is used!");
        assert_eq!(expand("ab-cd", "(b)-(c)", "cost $x$"), "cost $x$");
    }

    #[test]
    fn test_regex_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(
            out.as_str(),
            "8:808-2321 3:808 4:2321 AAA <808 2321> BBB 8:<abc.cc> 9:<www.txt> "
        );
    }

    #[test]
    fn test_all_matches_needs_a_two_or_three_letter_extension() {
        let pattern = r"<\w+\.\w{2,3}>";
        assert_eq!(all_matches("<abc.cc> <www.txt>", pattern).unwrap(), ["<abc.cc>", "<www.txt>"]);
        assert!(all_matches("<s.d>", pattern).unwrap().is_empty(), "A one letter extension is too short!");
        assert!(all_matches("<bb.exe >", pattern).unwrap().is_empty(), "No space is allowed before the '>'!");
        assert!(all_matches("<ab.html>", pattern).unwrap().is_empty());
    }
}
