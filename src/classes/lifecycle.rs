use std::cell::Cell;
use std::sync::atomic::AtomicI32;

use crate::tour::EventLog;

#[derive(Debug)]
pub struct Base {
    log: EventLog,
}

impl Base {
    pub fn new(log: &EventLog, _seed: i32) -> Base {
        log.record("BaseCtor");
        Base {
            log: log.clone(),
        }
    }
}

impl Drop for Base {
    fn drop(&mut self) {
        self.log.record("BaseDestr");
    }
}

/// Builds its [`Base`] part first. On drop its own body runs before the fields are dropped, so the
/// base goes last.
#[derive(Debug)]
pub struct Derived {
    base: Base,
}

impl Derived {
    pub fn new(log: &EventLog, seed: i32) -> Derived {
        let base = Base::new(log, seed);
        log.record("DerivedCtor");
        Derived {
            base,
        }
    }
}

impl Drop for Derived {
    fn drop(&mut self) {
        self.base.log.record("DerivedDestr");
    }
}

/// Caches whether it has been formatted behind a shared reference.
#[derive(Debug, Default)]
pub struct Formatted {
    is_formatted: Cell<bool>,
}

impl Formatted {
    pub const fn new() -> Formatted {
        Formatted {
            is_formatted: Cell::new(false),
        }
    }

    pub fn is_formatted(&self) -> bool {
        self.is_formatted.get()
    }

    /// Logically read-only: callers can't see a difference apart from the cached flag.
    pub fn format(&self) {
        if !self.is_formatted.get() {
            self.is_formatted.set(true);
        }
    }
}

pub trait Value {
    fn get(&self) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plain {
    a: i32,
}

impl Plain {
    pub const fn new(a: i32) -> Plain {
        Plain {
            a,
        }
    }
}

impl Value for Plain {
    fn get(&self) -> i32 {
        self.a
    }
}

/// Embeds a [`Plain`] and overrides what [`Value::get`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extended {
    plain: Plain,
    b: i32,
}

impl Extended {
    pub const fn new(a: i32, b: i32) -> Extended {
        Extended {
            plain: Plain::new(a),
            b,
        }
    }

    /// Copies out only the embedded part. The override is lost with the rest of the value.
    pub const fn sliced(&self) -> Plain {
        self.plain
    }
}

impl Value for Extended {
    fn get(&self) -> i32 {
        self.b
    }
}

/// Associated and global constants.
pub struct Constants;

impl Constants {
    pub const A: i32 = 1;
}

pub static COUNTER: AtomicI32 = AtomicI32::new(2);
