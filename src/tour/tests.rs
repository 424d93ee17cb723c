#![cfg(test)]

use std::fmt::Write;

use super::*;
use crate::exceptions::{Exception, InvalidArgument};

fn greet(out: &mut Transcript) -> Result<(), TourError> {
    out.token("hello")?;
    out.token(42)?;
    Ok(())
}

fn broken(out: &mut Transcript) -> Result<(), TourError> {
    out.token("partial")?;
    Err(Exception::from(InvalidArgument::new("bad input")))?
}

#[test]
fn test_transcript_tokens() {
    let mut out = Transcript::new();
    out.token(1).unwrap();
    out.tokens(["a", "b"]).unwrap();
    write!(out, "x={}", 3).unwrap();

    assert_eq!(out.as_str(), "1 a b x=3", "Tokens should be separated by a single space.");
    assert_eq!(out.words().count(), 4);
}

#[test]
fn test_run_topic_layout() {
    let mut sink = Vec::new();
    let completed = run_topic(&Topic::new("greet", "Greeting", greet), &mut sink).unwrap();

    assert!(completed);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "*** Greeting ***\nhello 42 \n\n",
        "A topic is printed as a header line, its body and two line breaks."
    );
}

#[test]
fn test_failing_topic_does_not_stop_the_rest() {
    let topics = [
        Topic::new("broken", "Broken", broken),
        Topic::new("greet", "Greeting", greet),
    ];
    let mut sink = Vec::new();
    let failed = run_all(&topics, &mut sink).unwrap();
    let text = String::from_utf8(sink).unwrap();

    assert_eq!(failed, 1);
    assert_eq!(
        text,
        "*** Broken ***\npartial ERROR \n\n*** Greeting ***\nhello 42 \n\n",
        "A failure should print the diagnostic marker and move on to the next topic."
    );
}

#[test]
fn test_registry_keys_are_unique() {
    let topics = registry();
    for (index, topic) in topics.iter().enumerate() {
        assert!(
            topics[index + 1..].iter().all(|other| other.key != topic.key),
            "Topic key {} is registered twice.",
            topic.key
        );
    }
    assert_eq!(topics[0].title, "Arrays");
    assert!(find("containers").is_some());
    assert!(find("input").is_none(), "The input topic is never part of the automated run.");
}

#[test]
fn test_every_registered_topic_completes() {
    // The file topic writes into the working directory and is covered by the stream tests.
    for topic in registry().into_iter().filter(|topic| topic.key != "files") {
        let (transcript, outcome) = topic.capture();
        assert!(outcome.is_ok(), "Topic {} failed: {:?}", topic.key, outcome);
        assert!(!transcript.is_empty(), "Topic {} printed nothing.", topic.key);
    }
}
