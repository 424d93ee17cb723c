use std::fmt::{self, Display, Formatter};
use std::ptr;

use crate::tour::EventLog;

/// A complex number that reports every copy it takes part in.
///
/// Copies are explicit in Rust, so the traces show up exactly where `clone` or `clone_from` is
/// called and nowhere else.
#[derive(Debug)]
pub struct Complex {
    re: f64,
    im: f64,
    log: EventLog,
}

impl Complex {
    pub fn new(log: &EventLog, re: f64, im: f64) -> Complex {
        Complex {
            re,
            im,
            log: log.clone(),
        }
    }

    pub fn zero(log: &EventLog) -> Complex {
        Complex::new(log, 0.0, 0.0)
    }

    pub const fn re(&self) -> f64 {
        self.re
    }

    pub const fn im(&self) -> f64 {
        self.im
    }

    pub const fn set(&mut self, re: f64, im: f64) {
        self.re = re;
        self.im = im;
    }
}

impl Clone for Complex {
    fn clone(&self) -> Self {
        self.log.record("CopyCtor");
        Complex {
            re: self.re,
            im: self.im,
            log: self.log.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.log.record("CopyAssignmentOperator");
        if !ptr::eq(&*self, source) {
            self.re = source.re;
            self.im = source.im;
        }
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

/// Takes its argument by value and reads the private fields directly, so the caller has to hand
/// over a copy.
pub fn describe(z: Complex) -> String {
    format!("z=({}, {})", z.re, z.im)
}
