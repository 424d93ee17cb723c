//! Shared and mutable references, raw pointers, references to arrays and function pointers.

use crate::tour::{TourError, Transcript};

/// Increments through an explicit `&mut`, so the call site shows the mutation.
pub fn incr(p: &mut i32) {
    *p += 1;
}

/// Returns an incremented copy and leaves the argument alone.
pub const fn incremented(p: i32) -> i32 {
    p + 1
}

/// A reference to whichever of the two values is larger, preferring `n` on a tie.
pub fn larger<'a>(m: &'a i32, n: &'a i32) -> &'a i32 {
    if m > n { m } else { n }
}

pub struct Book {
    pub pages: u32,
}

impl Book {
    pub fn pages(&self) -> u32 {
        self.pages
    }
}

fn basics(out: &mut Transcript) -> Result<(), TourError> {
    let mut a = 1;
    let pa = &mut a;
    *pa += 1;
    out.token(*pa)?;

    let mut b = 2;
    let rb = &mut b;
    *rb += 1;
    out.token(*rb)?;
    Ok(())
}

fn const_pointers() {
    let mut s = *b"test";

    // Whether the pointee may change is part of the pointer type, not the binding.
    let p1: *mut u8 = s.as_mut_ptr();
    let p2: *const u8 = s.as_ptr();
    let p4 = p1;
    debug_assert!(std::ptr::eq(p2, p4));

    let a = 1;
    let pa: &i32 = &a;
    let mut b = 1;
    let pb: &mut i32 = &mut b;
    *pb += *pa;
    debug_assert_eq!(b, 2);
}

fn declarations(out: &mut Transcript) -> Result<(), TourError> {
    let i = 1;
    let pi = &i;
    let ri: &&i32 = &pi;
    out.token(**ri)?;

    let book: Option<&Book> = None;
    debug_assert!(book.is_none());

    let c = 'a';
    let pc = &c;
    let ppc = &pc;
    debug_assert_eq!(**ppc, 'a');

    let a = [1, 2, 3, 4, 5];
    let pa1: &[i32] = &a;
    let pa2 = &a[0];
    debug_assert!(std::ptr::eq(pa1.as_ptr(), pa2));

    let ps: [&str; 3] = ["aaa", "bbb", "ccc"];
    let br: &[i32; 5] = &a;
    debug_assert_eq!(br.len(), ps.len() + 2);

    let (m, n) = (1, 8);
    let pm = larger(&m, &n);
    out.token(pm)?;

    // The temporary lives as long as the reference bound to it.
    let cdr: &f64 = &1.0;
    debug_assert_eq!(*cdr, 1.0);

    let f: fn(i32) -> i32 = incremented;
    let method: fn(&Book) -> u32 = Book::pages;
    debug_assert_eq!(f(1) + method(&Book { pages: 10 }) as i32, 12);
    Ok(())
}

fn increments(out: &mut Transcript) -> Result<(), TourError> {
    let mut c = 0;
    incr(&mut c);
    out.token(c)?;
    c = incremented(c);
    out.token(c)?;
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    basics(out)?;
    const_pointers();
    declarations(out)?;
    increments(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_larger_points_at_the_winner() {
        let (m, n) = (5, 3);
        assert!(std::ptr::eq(larger(&m, &n), &m));
        let (x, y) = (4, 4);
        assert!(std::ptr::eq(larger(&x, &y), &y), "A tie should pick the second value!");
    }

    #[test]
    fn test_incr_variants() {
        let mut c = 41;
        incr(&mut c);
        assert_eq!(c, 42);
        assert_eq!(incremented(c), 43);
        assert_eq!(c, 42, "Passing by value should not touch the original!");
    }

    #[test]
    fn test_pointers_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(out.as_str(), "2 3 1 8 1 2 ");
    }
}
