//! A module containing owning pointer types and the smart pointer topic.
//!
//! [`UniqueOwner`] is exclusive ownership of a heap value with the release/reset vocabulary of a
//! unique pointer. [`UniqueHandle`] applies the same idea to raw OS handles. Its behaviour is
//! described by a [`HandleTraits`] implementation, which says what an invalid handle looks like and
//! how a valid one is closed. Shared and weak ownership use [`Rc`](std::rc::Rc) and
//! [`Weak`](std::rc::Weak) directly.

mod handle;
mod smart_pointers;
mod unique;

pub use handle::*;
pub use smart_pointers::*;
pub use unique::*;
