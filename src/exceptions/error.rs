use derive_more::{Display, Error, From, IsVariant};

use crate::util::error::{IndexOutOfBounds, InvalidRange};

macro_rules! message_error {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
            #[display("{message}")]
            pub struct $name {
                pub message: String,
            }

            impl $name {
                pub fn new<M: Into<String>>(message: M) -> $name {
                    $name {
                        message: message.into(),
                    }
                }
            }
        )*
    };
}

message_error! {
    /// An argument was outside of what the callee accepts.
    InvalidArgument;
    /// An input was outside of the domain of a mathematical operation.
    DomainError;
    /// An index or key was outside of the valid range.
    OutOfRange;
    /// A length limit would have been exceeded.
    LengthError;
    /// An arithmetic result was too large to represent.
    OverflowError;
    /// A computed result was outside of the representable range.
    RangeError;
    /// An arithmetic result was too small to represent.
    UnderflowError;
}

/// A checked downcast was asked for the wrong concrete type.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("bad cast")]
pub struct BadCast;

/// Errors that come from a mistake in the calling code and could have been prevented.
#[derive(Debug, Display, Error, From, Clone, PartialEq, Eq, IsVariant)]
pub enum LogicError {
    InvalidArgument(InvalidArgument),
    Domain(DomainError),
    OutOfRange(OutOfRange),
    Length(LengthError),
}

/// Errors that only show up once the program is running.
#[derive(Debug, Display, Error, From, Clone, PartialEq, Eq, IsVariant)]
pub enum RuntimeError {
    Overflow(OverflowError),
    Range(RangeError),
    Underflow(UnderflowError),
}

/// The root of the hierarchy. Matching on it from the most specific variant down to the widest
/// one is the equivalent of ordering catch clauses.
#[derive(Debug, Display, Error, From, Clone, PartialEq, Eq, IsVariant)]
pub enum Exception {
    Logic(LogicError),
    Runtime(RuntimeError),
    BadCast(BadCast),
}

macro_rules! into_exception {
    ($($leaf:ident => $branch:ident),* $(,)?) => {
        $(
            impl From<$leaf> for Exception {
                fn from(value: $leaf) -> Self {
                    Exception::$branch(value.into())
                }
            }
        )*
    };
}

into_exception! {
    InvalidArgument => Logic,
    DomainError => Logic,
    OutOfRange => Logic,
    LengthError => Logic,
    OverflowError => Runtime,
    RangeError => Runtime,
    UnderflowError => Runtime,
}

impl From<IndexOutOfBounds> for Exception {
    fn from(value: IndexOutOfBounds) -> Self {
        OutOfRange::new(value.to_string()).into()
    }
}

impl From<InvalidRange> for Exception {
    fn from(value: InvalidRange) -> Self {
        OutOfRange::new(value.to_string()).into()
    }
}
