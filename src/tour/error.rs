use std::{fmt, io};

use derive_more::{Display, Error, From, IsVariant};

use crate::exceptions::Exception;

/// Everything that can stop a topic part way through.
///
/// Topics bubble failures up with `?`. The driver reports them and moves on to the next topic.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum TourError {
    Fmt(fmt::Error),
    Io(io::Error),
    #[cfg(feature = "regex")]
    Regex(regex::Error),
    Exception(Exception),
}
