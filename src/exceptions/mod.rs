//! A module containing the [`Exception`] hierarchy and the topic that raises and handles it.

mod error;
mod exceptions;
mod tests;

pub use error::*;
pub use exceptions::*;
