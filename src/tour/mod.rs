//! A module containing the driver pieces: [`Transcript`], [`EventLog`], [`Topic`] and the ordered
//! topic registry.

mod error;
mod event_log;
mod registry;
mod tests;
mod topic;
mod transcript;

pub use error::*;
pub use event_log::*;
pub use registry::*;
pub use topic::*;
pub use transcript::*;
