//! A module containing the container types and algorithms used by the containers topic.
//!
//! [`LinkedList`] is a doubly linked list built on raw node pointers, [`MultiMap`] stores any
//! number of values per ordered key and [`FileKey`] shows a hand written [`Hash`](std::hash::Hash)
//! implementation for a composite key. The standard collections cover everything else.

mod algorithms;
mod containers;
mod file_key;
pub mod linked_list;
mod multi_map;
mod person;

pub use algorithms::*;
pub use containers::*;
pub use file_key::*;
pub use linked_list::LinkedList;
pub use multi_map::*;
pub use person::*;
