//! A module containing user-defined types with traced special members, trait-object dispatch and
//! the [`Account`] compilation firewall.

mod account;
mod classes;
mod complex;
mod lifecycle;
mod person;
mod tests;

pub use account::*;
pub use classes::*;
pub use complex::*;
pub use lifecycle::*;
pub use person::*;
