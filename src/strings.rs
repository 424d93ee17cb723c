//! Owned and borrowed strings, searching and editing them, and crossing over to nul-terminated
//! C strings and UTF-16.

use std::ffi::{CStr, CString};
use std::mem;

use static_assertions::const_assert_eq;

use crate::tour::{FAILURE_MARKER, TourError, Transcript};

// A UTF-8 code unit is a byte and a UTF-16 code unit is two.
const_assert_eq!(mem::size_of::<u8>(), 1);
const_assert_eq!(mem::size_of::<u16>(), 2);

/// `s` without leading or trailing whitespace, found by searching inwards from both ends.
pub fn trim(s: &str) -> &str {
    let Some(front) = s.find(|c: char| !c.is_whitespace()) else {
        return "";
    };
    let back = s.rfind(|c: char| !c.is_whitespace()).unwrap_or(front);
    let end = back + s[back..].chars().next().map_or(0, char::len_utf8);
    &s[front..end]
}

/// The number of bytes before the nul terminator.
pub fn c_len(s: &CStr) -> usize {
    #[cfg(feature = "handles")]
    {
        // SAFETY: A CStr is always nul-terminated.
        unsafe { libc::strlen(s.as_ptr()) }
    }
    #[cfg(not(feature = "handles"))]
    {
        s.count_bytes()
    }
}

fn check(out: &mut Transcript, condition: bool) -> Result<(), TourError> {
    if !condition {
        out.token(FAILURE_MARKER)?;
    }
    Ok(())
}

fn basics(out: &mut Transcript) -> Result<(), TourError> {
    let rs1 = r#"aaa \ bbb " ccc"#;
    let rs2 = r##"aaa )" bbb"##;
    let rs4 = r"\\aaa\bbb\ccc\f.txt";
    debug_assert!(rs1.contains('\\') && rs2.contains('"') && rs4.starts_with(r"\\"));

    let mut s = String::from("hi");
    check(out, !s.is_empty() && s.len() == 2)?;
    out.token(&s)?;

    s = ['a', 'b', 'c'].iter().collect();
    out.token(&s)?;

    s.clear();
    check(out, s.is_empty())?;
    check(out, CString::default().as_bytes().len() == s.len())?;

    s = String::from("abcdef");
    s = String::from(&s[2..5]);
    check(out, s == "cde")?;
    for c in s.chars() {
        out.raw(c)?;
    }
    out.raw(' ')?;

    let x = String::from("A") + "@" + "B";
    let c = x.find('@').map(|pos| &x[pos..]);
    check(out, c == Some("@B"))?;
    check(out, trim(" \t zzz \r\n ") == "zzz")?;
    Ok(())
}

fn operations(out: &mut Transcript) -> Result<(), TourError> {
    let d = 2.8;
    out.token(format_args!("{d:.6}"))?;

    let s = "123456";
    out.token(format_args!("len={}", s.len()))?;
    out.token(format_args!("len={}", s.chars().count()))?;
    out.token(format_args!("len={}", c_len(c"123456")))?;

    let s = "abcdec";
    out.token(format_args!("cnt={}", s.matches('c').count()))?;

    let s = "abcd ef gi";
    if let Some(first) = s.find(' ') {
        out.token(first)?;
        out.token(&s[first + 1..])?;
    }

    let s = "abcdec";
    if let Some(c) = s.chars().find(|&c| c == 'c') {
        out.token(c)?;
    }

    let mut s = String::from("Hello there!");
    out.token(&s[6..11])?;
    s.replace_range(6..11, "buba");
    out.token(&s)?;
    Ok(())
}

fn read_values(out: &mut Transcript) -> Result<(), TourError> {
    let command_line = "a b";
    let mut words = command_line.split_whitespace();
    let va = words.next().unwrap_or_default();
    let vb = words.next().unwrap_or_default();
    out.token(format_args!("{va}{vb}"))?;
    Ok(())
}

fn char_types(out: &mut Transcript) -> Result<(), TourError> {
    let ch = i8::MIN;
    let uch = u8::MAX;
    out.token(format_args!("Signed={ch}"))?;
    out.token(format_args!("Unsigned={uch}"))?;
    out.token(format_args!("ASCII('L')={}(dec)", 'L' as u32))?;
    out.token(format_args!("ASCII('L')={:x}(hex)", 'L' as u32))?;
    out.token(format_args!("'b'+1={}", b'b' + 1))?;
    out.token(format_args!("char(' '+10)={}", char::from(b' ' + 10)))?;
    Ok(())
}

fn wide(out: &mut Transcript) -> Result<(), TourError> {
    let s = "żółw";
    let utf16: Vec<u16> = s.encode_utf16().collect();
    out.token(format_args!("bytes={} chars={} utf16={}", s.len(), s.chars().count(), utf16.len()))?;
    check(out, String::from_utf16(&utf16).is_ok_and(|back| back == s))?;
    Ok(())
}

fn c_strings(out: &mut Transcript) -> Result<(), TourError> {
    let say_something = |out: &mut Transcript, s: &CStr| out.token(trim(&s.to_string_lossy()));

    let cstr = c"A ";
    say_something(out, cstr)?;
    let owned = CString::from(c"B ");
    let pstr: &CStr = &owned;
    say_something(out, pstr)?;
    out.token(c_len(&owned))?;
    out.token(c_len(pstr))?;

    let s1 = "AAA";
    let s2 = "AAA";
    if s1 == s2 {
        out.token("TheSame")?;
    }
    if !std::ptr::eq(&s1, &s2) {
        out.token("Different")?;
    }

    let src = c"abcde";
    let dst = src.to_owned();
    out.token(dst.to_string_lossy())?;
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    basics(out)?;
    operations(out)?;
    read_values(out)?;
    char_types(out)?;
    wide(out)?;
    c_strings(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim(" \t zzz \r\n "), "zzz");
        assert_eq!(trim("a b"), "a b", "Inner whitespace should be kept!");
        assert_eq!(trim("   "), "");
        assert_eq!(trim(""), "");
        assert_eq!(trim(" żółw "), "żółw");
    }

    #[test]
    fn test_c_len() {
        assert_eq!(c_len(c""), 0);
        assert_eq!(c_len(c"abcde"), 5);
    }

    #[test]
    fn test_strings_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(
            out.as_str(),
            concat!(
                "hi abc cde ",
                "2.800000 len=6 len=6 len=6 cnt=2 4 ef gi c there Hello buba! ",
                "ab ",
                "Signed=-128 Unsigned=255 ASCII('L')=76(dec) ASCII('L')=4c(hex) 'b'+1=99 char(' '+10)=* ",
                "bytes=7 chars=4 utf16=4 ",
                "A B 2 2 TheSame Different abcde ",
            )
        );
    }
}
