use std::fmt::{self, Debug, Formatter};
use std::io::{self, Write};

use tracing::{debug, error, info_span};

use super::{TourError, Transcript};

pub type RunFn = fn(&mut Transcript) -> Result<(), TourError>;

/// A single demonstration: a header to print and the routine that produces its body.
#[derive(Clone, Copy)]
pub struct Topic {
    pub key: &'static str,
    pub title: &'static str,
    pub run: RunFn,
}

impl Topic {
    pub const fn new(key: &'static str, title: &'static str, run: RunFn) -> Topic {
        Topic {
            key,
            title,
            run,
        }
    }

    /// Runs the topic into a fresh [`Transcript`].
    ///
    /// On failure the partial transcript is returned alongside the error, so the caller can still
    /// print whatever the topic managed to produce.
    pub fn capture(&self) -> (Transcript, Result<(), TourError>) {
        let mut transcript = Transcript::new();
        let outcome = (self.run)(&mut transcript);
        (transcript, outcome)
    }
}

impl Debug for Topic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Topic")
            .field("key", &self.key)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Marker printed in place of the rest of a topic's body when the topic fails.
pub const FAILURE_MARKER: &str = "ERROR";

/// Prints one topic in the driver's layout: a `*** Title ***` header line, the body, then two
/// line breaks. Returns whether the topic completed.
pub fn run_topic<W: Write>(topic: &Topic, sink: &mut W) -> io::Result<bool> {
    let span = info_span!("topic", key = topic.key);
    let _guard = span.enter();
    debug!("starting");

    let (transcript, outcome) = topic.capture();

    writeln!(sink, "*** {} ***", topic.title)?;
    sink.write_all(transcript.as_str().as_bytes())?;

    let completed = match outcome {
        Ok(()) => true,
        Err(err) => {
            error!(error = %err, "topic failed");
            write!(sink, "{FAILURE_MARKER} ")?;
            false
        },
    };

    write!(sink, "\n\n")?;
    debug!(completed, bytes = transcript.len(), "finished");
    Ok(completed)
}

/// Runs every topic in order, returning how many of them failed. A failing topic never stops the
/// ones after it.
pub fn run_all<W: Write>(topics: &[Topic], sink: &mut W) -> io::Result<usize> {
    let mut failed = 0;
    for topic in topics {
        if !run_topic(topic, sink)? {
            failed += 1;
        }
    }
    sink.flush()?;
    Ok(failed)
}
