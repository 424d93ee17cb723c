//! This crate is a guided tour of language and library features, one small demonstration at a
//! time.
//!
//! # Purpose
//! Each module is a topic: a handful of short, self-contained demonstrations of one area, like
//! ownership, containers, closures or error handling. Running a topic produces a line of compact
//! tokens, so its behaviour can be checked by eye or by a test that compares the exact text. The
//! binary runs every topic in order, each under a `*** Title ***` header.
//!
//! # Method
//! Topics never print on their own. They write into a [`Transcript`](tour::Transcript) and the
//! driver in [`tour`] decides where the text goes. Types that want to show when they are created,
//! copied or dropped share an [`EventLog`](tour::EventLog) and the topic copies the log into its
//! transcript at the right moment.
//!
//! Where a topic needs a data structure the standard library doesn't have, it gets its own: a
//! doubly linked [`LinkedList`](collections::LinkedList) with range removal and splicing, an ordered
//! [`MultiMap`](collections::MultiMap), and owning wrappers for heap values and raw OS handles in
//! [`smart_pointers`].
//!
//! # Error Handling
//! Errors are strongly typed. Each error is a small struct implementing
//! [`Error`](std::error::Error), grouped into enums for static dispatch. The [`exceptions`] module
//! arranges them as a hierarchy of logic errors and runtime errors under a single
//! [`Exception`](exceptions::Exception), and every topic returns a
//! [`TourError`](tour::TourError). A failing topic is logged and marked in the output, and the
//! driver moves on to the next one.
//!
//! # Dependencies
//! The derive macros of `derive_more` remove a lot of very repetitive error boilerplate. Logging
//! goes through `tracing`. The remaining dependencies are optional and each enables one topic:
//! - `random` uses `rand` and `chrono` for pseudorandom numbers seeded from the clock.
//! - `regex` uses `regex` for regular expressions.
//! - `graphics` uses `glam` for vector and matrix math.
//! - `handles` uses `libc` for the raw file descriptor wrapper. It only does anything on unix.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod arrays;
pub mod casting;
pub mod classes;
pub mod collections;
pub mod conversion;
pub mod enums;
pub mod exceptions;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod inference;
pub mod initialization;
pub mod input;
pub mod lambda;
pub mod moves;
pub mod numbers;
pub mod operators;
pub mod pointers;
#[cfg(feature = "random")]
pub mod random;
pub mod recursion;
#[cfg(feature = "regex")]
pub mod regular_expressions;
pub mod smart_pointers;
pub mod streams;
pub mod strings;
pub mod templates;
pub mod timing;
pub mod tour;

pub(crate) mod util;
