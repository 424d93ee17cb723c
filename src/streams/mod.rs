//! A module containing the file and formatting topics.
//!
//! The file topic writes a small text file and reads it back in a few different ways. Its path
//! comes from a [`StreamConfig`], so nothing but the driver ever touches the working directory.

mod files;
mod formatting;
mod tests;

pub use files::*;
pub use formatting::*;
