//! Moving values out of places, swapping through moves and how containers move their elements.
//!
//! [`Resource`] reports every construction, copy, move and drop into an [`EventLog`]. Tokens are
//! `nc` (named), `dc` (empty), `cc` (clone), `co` (clone into an existing value), `mc` (moved out),
//! `mo` (move assigned), `sw` (swapped) and `d` (dropped), each followed by the name and a comma.

use std::mem;

use tracing::trace;

use crate::collections::LinkedList;
use crate::tour::{EventLog, TourError, Transcript};

pub struct Resource {
    name: String,
    log: EventLog,
}

impl Resource {
    pub fn empty(log: &EventLog) -> Resource {
        log.record_raw("dc,");
        Resource {
            name: String::new(),
            log: log.clone(),
        }
    }

    pub fn named<S: Into<String>>(log: &EventLog, name: S) -> Resource {
        let name = name.into();
        log.record_raw(format_args!("nc{name},"));
        Resource {
            name,
            log: log.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Moves the name into a new Resource, leaving this one empty but still usable.
    pub fn take(&mut self) -> Resource {
        let name = mem::take(&mut self.name);
        self.log.record_raw(format_args!("mc{name},"));
        Resource {
            name,
            log: self.log.clone(),
        }
    }

    /// Moves the name of `other` into this Resource and leaves `other` empty.
    pub fn assign_from(&mut self, other: &mut Resource) {
        self.log.record_raw(format_args!("mo{},", other.name));
        self.name = mem::take(&mut other.name);
    }

    pub fn swap(&mut self, other: &mut Resource) {
        self.log.record_raw(format_args!("sw{}{},", self.name, other.name));
        mem::swap(&mut self.name, &mut other.name);
    }
}

impl Clone for Resource {
    fn clone(&self) -> Self {
        self.log.record_raw(format_args!("cc{},", self.name));
        Resource {
            name: self.name.clone(),
            log: self.log.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.log.record_raw(format_args!("co{},", self.name));
        self.name.clone_from(&source.name);
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        self.log.record_raw(format_args!("d{},", self.name));
    }
}

/// Swaps two places with three moves and no copies.
pub fn swap_by_moves<T: Default>(x: &mut T, y: &mut T) {
    let tmp = mem::take(x);
    *x = mem::replace(y, tmp);
}

/// Reverses `values` in place using each element's own swap.
pub fn reverse_by_swap(values: &mut [Resource]) {
    let len = values.len();
    for i in 0..len / 2 {
        let (front, back) = values.split_at_mut(len - 1 - i);
        front[i].swap(&mut back[0]);
    }
}

fn get() -> i32 {
    83
}

fn temporaries(out: &mut Transcript) -> Result<(), TourError> {
    let x = get();
    out.token(x)?;

    #[derive(Default)]
    struct Book;
    let mut books: [Book; 10] = Default::default();
    // The temporary is moved into the slot, no copy is made.
    books[7] = Book;
    let boxed: [Option<Box<Book>>; 10] = Default::default();
    debug_assert!(boxed[7].is_none() && books.len() == 10);
    Ok(())
}

fn swapping(out: &mut Transcript) -> Result<(), TourError> {
    let (mut x, mut y) = (2, 5);

    let tmp = x;
    x = y;
    y = tmp;
    out.token(format_args!("{x},{y}"))?;

    swap_by_moves(&mut x, &mut y);
    out.token(format_args!("{x},{y}"))?;

    mem::swap(&mut x, &mut y);
    out.token(format_args!("{x},{y}"))?;
    Ok(())
}

fn transfers(log: &EventLog, out: &mut Transcript) -> Result<(), TourError> {
    {
        let mut a = Resource::named(log, "X");
        let mut b = a.take();
        let mut c = Resource::named(log, "Y");
        c.assign_from(&mut b);
        let d = c.clone();
        let mut e = Resource::named(log, "Z");
        e.clone_from(&d);
        trace!(name = e.name(), "copied into existing resource");
    }
    log.drain_into(out)?;
    out.raw(' ')?;
    Ok(())
}

fn containers(log: &EventLog, out: &mut Transcript) -> Result<(), TourError> {
    for name in [None, Some("A"), Some("B")] {
        let mut c = LinkedList::new();
        c.push_back(match name {
            Some(name) => Resource::named(log, name),
            None => Resource::empty(log),
        });
        c.clear();
        log.record_raw(' ');
    }

    {
        let mut c = LinkedList::new();
        for name in ["A", "B", "C", "D", "E"] {
            c.push_back(Resource::named(log, name));
        }
        log.record_raw(' ');
        // Relinking the nodes reverses the list without touching any element.
        c.reverse();
    }
    log.record_raw(' ');

    {
        let mut c = Vec::new();
        for name in ["A", "B", "C", "D", "E"] {
            // Growing the buffer relocates the elements bitwise, so nothing is printed.
            c.push(Resource::named(log, name));
        }
        log.record_raw(' ');
        reverse_by_swap(&mut c);
    }
    log.record_raw(' ');

    log.drain_into(out)?;
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    temporaries(out)?;
    swapping(out)?;

    let log = EventLog::new();
    transfers(&log, out)?;
    containers(&log, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_take_leaves_source_empty() {
        let log = EventLog::new();
        let mut a = Resource::named(&log, "A");
        let b = a.take();
        assert_eq!((a.name(), b.name()), ("", "A"));
        drop(a);
        drop(b);
        assert_eq!(log.take(), "ncA,mcA,d,dA,");
    }

    #[test]
    fn test_reverse_by_swap() {
        let log = EventLog::new();
        let mut values: Vec<_> = ["A", "B", "C", "D"].map(|n| Resource::named(&log, n)).into();
        log.take();
        reverse_by_swap(&mut values);
        assert_eq!(values.iter().map(Resource::name).collect::<String>(), "DCBA");
        assert_eq!(log.take(), "swAD,swBC,");
    }

    #[test]
    fn test_moves_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(
            out.as_str(),
            concat!(
                "83 5,2 2,5 5,2 ",
                "ncX,mcX,ncY,moX,ccX,ncZ,coZ,dX,dX,dX,d,d, ",
                "dc,d, ncA,dA, ncB,dB, ",
                "ncA,ncB,ncC,ncD,ncE, dE,dD,dC,dB,dA, ",
                "ncA,ncB,ncC,ncD,ncE, swAE,swBD,dE,dD,dC,dB,dA, ",
            )
        );
    }

    proptest! {
        #[test]
        fn prop_swap_by_moves_twice_restores(a: String, b: String) {
            let (mut x, mut y) = (a.clone(), b.clone());
            swap_by_moves(&mut x, &mut y);
            prop_assert_eq!((&x, &y), (&b, &a));
            swap_by_moves(&mut x, &mut y);
            prop_assert_eq!((x, y), (a, b));
        }
    }
}
