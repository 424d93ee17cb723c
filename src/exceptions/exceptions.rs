use std::rc::{Rc, Weak};

use tracing::trace;

use super::{
    BadCast, DomainError, Exception, InvalidArgument, LogicError, OutOfRange, OverflowError,
    RuntimeError,
};
use crate::tour::{TourError, Transcript};

/// Bounds-checked element access, failing the same way a checked vector lookup does.
pub fn at<T>(values: &[T], index: usize) -> Result<&T, OutOfRange> {
    values.get(index).ok_or_else(|| OutOfRange::new("invalid vector subscript"))
}

/// Names the handler that would run for `exc` if handlers were tried from the most specific kind
/// to the least specific one.
pub const fn catch_most_specific(exc: &Exception) -> &'static str {
    match exc {
        Exception::Logic(LogicError::OutOfRange(_)) => "out_of_range",
        Exception::Logic(LogicError::InvalidArgument(_)) => "invalid_argument",
        Exception::Logic(_) => "logic_error",
        Exception::Runtime(RuntimeError::Overflow(_)) => "overflow_error",
        Exception::Runtime(_) => "runtime_error",
        Exception::BadCast(_) => "bad_cast",
    }
}

struct Book;

/// Fails with a domain error while holding a shared allocation. The allocation is gone by the
/// time the caller sees the error.
fn allocate_then_fail(observer: &mut Weak<Book>) -> Result<(), DomainError> {
    let book = Rc::new(Book);
    *observer = Rc::downgrade(&book);
    trace!("allocated book before failing");
    Err(DomainError::new("error"))
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    let raised: Result<(), Exception> = Err(InvalidArgument::new("An error occurred").into());
    if let Err(exc) = raised {
        out.token(exc)?;
    }

    let mut values = Vec::new();
    values.push(1);
    match at(&values, 10) {
        Ok(value) => out.token(value)?,
        Err(exc) => out.token(exc)?,
    }

    let mut observer = Weak::new();
    if allocate_then_fail(&mut observer).is_err() && observer.upgrade().is_none() {
        out.token("deallocation")?;
    }

    let raised: [Exception; 4] = [
        OutOfRange::new("index").into(),
        DomainError::new("domain").into(),
        OverflowError::new("overflow").into(),
        BadCast.into(),
    ];
    for exc in &raised {
        out.token(catch_most_specific(exc))?;
    }

    Ok(())
}
