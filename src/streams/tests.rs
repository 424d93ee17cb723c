#![cfg(test)]

use std::collections::BTreeMap;
use std::fs;

use tempfile::TempDir;

use super::*;
use crate::tour::Transcript;

fn scratch() -> (TempDir, StreamConfig) {
    let dir = tempfile::tempdir().expect("failed to create a temporary directory");
    let config = StreamConfig::new(dir.path().join("test.dat"));
    (dir, config)
}

#[test]
fn test_files_transcript() {
    let (_dir, config) = scratch();
    let mut out = Transcript::new();
    files_demo(&config, &mut out).unwrap();
    assert_eq!(out.as_str(), "BDABC BDABC BDABC ABCD ");
}

#[test]
fn test_file_contents_after_append() {
    let (_dir, config) = scratch();
    files_demo(&config, &mut Transcript::new()).unwrap();
    assert_eq!(
        fs::read_to_string(&config.path).unwrap(),
        "B\nD\nA\nB\nC\n7.118200\n",
        "The appended value should use six fixed decimals!"
    );
}

#[test]
fn test_read_tokens_sorted() {
    let (_dir, config) = scratch();
    write_lines(&config.path, &["B D", "A", "B C"]).unwrap();
    let mut tokens = read_tokens(&config.path).unwrap();
    tokens.sort();
    assert_eq!(tokens.join(" "), "A B B C D");
    assert_eq!(read_lines(&config.path).unwrap(), ["B D", "A", "B C"]);
}

#[test]
fn test_missing_file_is_an_error() {
    let (_dir, config) = scratch();
    assert!(read_tokens(&config.path).is_err());
}

#[test]
fn test_default_path() {
    assert_eq!(StreamConfig::default().path.to_str(), Some("test.dat"));
}

#[test]
fn test_formatting_helpers() {
    assert_eq!(padded(123.456789, 10, 1), "     123.5");
    assert_eq!(padded(123.456789, 10, 2), "    123.46");
    assert_eq!(padded(123.456789, 4, 3), "123.457", "Width is a minimum, not a limit!");
    assert_eq!(char_codes('9'), "'9' = 57(dec)/39(hex)");
    assert_eq!(join_pairs(&BTreeMap::<&str, i32>::new()).unwrap(), "");
}

#[test]
fn test_formatting_transcript() {
    let mut out = Transcript::new();
    run_formatting(&mut out).unwrap();
    assert_eq!(
        out.as_str(),
        concat!(
            "     123.5     123.46    123.457    1845.28 2.720000 ",
            "'I' = 73(dec)/49(hex) 'J' = 74(dec)/4a(hex) 'K' = 75(dec)/4b(hex) ",
            "'7' = 55(dec)/37(hex) '8' = 56(dec)/38(hex) '9' = 57(dec)/39(hex) ",
            "true false 1 5 3.5679 a:1,b:2.2 ",
        )
    );
}
