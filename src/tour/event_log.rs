use std::cell::RefCell;
use std::fmt::{Display, Write};
use std::rc::Rc;

use super::Transcript;

/// A shared, append-only record of lifecycle events.
///
/// Values that trace their own construction, copies, moves and drops hold a clone of the same log,
/// which lets a `Drop` impl report into the transcript even though it has no access to it.
#[derive(Debug, Default, Clone)]
pub struct EventLog(Rc<RefCell<String>>);

impl EventLog {
    pub fn new() -> EventLog {
        EventLog::default()
    }

    /// Appends `event` followed by a space.
    pub fn record<T: Display>(&self, event: T) {
        // Writing into a String cannot fail.
        let _ = write!(self.0.borrow_mut(), "{event} ");
    }

    /// Appends `event` with no separator, for traces that carry their own punctuation.
    pub fn record_raw<T: Display>(&self, event: T) {
        let _ = write!(self.0.borrow_mut(), "{event}");
    }

    /// Takes everything recorded so far, leaving the log empty.
    pub fn take(&self) -> String {
        self.0.take()
    }

    /// Moves everything recorded so far into `out`.
    pub fn drain_into(&self, out: &mut Transcript) -> std::fmt::Result {
        out.raw(self.take())
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}
