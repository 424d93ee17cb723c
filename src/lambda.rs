//! Closures: storing them, capturing by copy, by reference and by move, returning them and
//! recursing through them.
//!
//! A closure that would outlive a borrowed capture is rejected by the borrow checker, so the
//! dangling-capture mistakes other languages allow have no runnable counterpart here.

use std::fmt::Display;
use std::ops::{Add, Mul};

use crate::collections::generate_n;
use crate::tour::{TourError, Transcript};

/// Works for any pair of operands that can be added.
pub fn cat<A: Add<B>, B>(x: A, y: B) -> A::Output {
    x + y
}

/// Triples any number type that can be built from a small integer.
pub fn times_three<T: Mul<Output = T> + From<u8>>(z: T) -> T {
    z * T::from(3)
}

fn print_line<T: Display>(out: &mut Transcript, item: T) -> Result<(), TourError> {
    out.token(item)?;
    Ok(())
}

/// Hands out a closure that keeps its own copy of `x`.
pub fn return_closure(x: i32) -> impl Fn() -> i32 {
    move || 2 * x
}

fn accept_closure(predicate: &dyn Fn(f64) -> bool) -> bool {
    predicate(1.0)
}

static A: i32 = 5;
static B: i32 = -3;

fn access_statics() -> impl Fn() -> bool {
    || A + B > 0
}

/// Lets a closure call itself by passing it a handle to its own recursion.
pub fn fix<F>(f: &F, n: i32) -> i32
where
    F: Fn(&dyn Fn(i32) -> i32, i32) -> i32,
{
    f(&|k| fix(f, k), n)
}

pub fn fibonacci(n: i32) -> i32 {
    let step = |fib: &dyn Fn(i32) -> i32, n: i32| -> i32 {
        match n {
            n if n < 1 => -1,
            1 | 2 => 1,
            _ => fib(n - 1) + fib(n - 2),
        }
    };
    fix(&step, n)
}

struct Order {
    number: i32,
}

struct Customer {
    name: &'static str,
    orders: Vec<Order>,
}

fn basic(out: &mut Transcript) -> Result<(), TourError> {
    let double_value = |z: i32| z * 2;
    out.token(double_value(4))?;

    let is_greater_than_zero: Box<dyn Fn(f64) -> bool> = Box::new(|d| d > 0.0);
    out.token(u8::from(is_greater_than_zero(1.0)))?;

    let v = [1, 2, 3];
    v.iter().try_for_each(|i| out.raw(i))?;
    out.raw(' ')?;
    Ok(())
}

fn generic(out: &mut Transcript) -> Result<(), TourError> {
    let v = [1, 2, 3];
    out.token(times_three(2))?;
    out.token(v.iter().filter(|&&n| n % 2 != 0).count())?;
    out.token(cat(1, 2))?;
    out.token(cat(String::from("a"), "b"))?;
    print_line(out, 8)?;
    print_line(out, "qq")?;
    Ok(())
}

fn capture(out: &mut Transcript) -> Result<(), TourError> {
    let mut x = 4;
    let increase_value = move |z: i32| z + x;
    out.token(increase_value(3))?;
    x = 10;
    debug_assert_eq!(x, 10);
    out.token(increase_value(3))?;
    Ok(())
}

fn return_type(out: &mut Transcript) -> Result<(), TourError> {
    let v = [1, 2, 3, 4];
    let dv: Vec<f64> = v
        .iter()
        .map(|&n| -> f64 {
            if n % 2 == 0 {
                f64::from(n * n * n)
            } else {
                f64::from(n) / 2.0
            }
        })
        .collect();
    out.tokens(dv)?;
    Ok(())
}

fn mutable(out: &mut Transcript) -> Result<(), TourError> {
    let mut v = [1, 2, 3, 4];
    let (mut x, mut y) = (1, 1);
    // Each call sees the copies left behind by the previous one. The first copy of `x` is
    // overwritten before it is read.
    #[allow(unused_assignments)]
    let mut step = move |r: &mut i32| {
        let old = *r;
        *r *= 2;
        x = y;
        y = old;
        *r += x + y;
    };
    v.iter_mut().for_each(&mut step);
    out.tokens(v)?;
    out.token(x)?;
    out.token(y)?;

    let mut n = 0;
    let mut vec1 = Vec::new();
    generate_n(&mut vec1, 3, move || {
        n += 1;
        n - 1
    });
    vec1.iter().try_for_each(|i| out.raw(i))?;
    out.token(format_args!("-{n}"))?;

    let mut vec2 = Vec::new();
    generate_n(&mut vec2, 3, || {
        n += 1;
        n - 1
    });
    vec2.iter().try_for_each(|i| out.raw(i))?;
    out.token(format_args!("-{n}"))?;
    Ok(())
}

fn immediate(out: &mut Transcript) -> Result<(), TourError> {
    (|| out.token("A"))()?;
    let result = (|s: &str| -> String { s.to_string() })("Aye!");
    out.token(result)?;
    let a = (|| 8)();
    out.token(a)?;

    let f: fn() -> i32 = || 10;
    debug_assert_eq!(f(), 10);
    Ok(())
}

fn nesting(out: &mut Transcript) -> Result<(), TourError> {
    let customers = [
        Customer { name: "A", orders: vec![Order { number: 1 }, Order { number: 2 }] },
        Customer { name: "B", orders: vec![Order { number: 3 }, Order { number: 4 }] },
        Customer { name: "C", orders: vec![Order { number: 5 }, Order { number: 6 }] },
    ];
    customers.iter().try_for_each(|c| -> Result<(), TourError> {
        out.raw(format_args!("{}:", c.name))?;
        c.orders.iter().try_for_each(|o| out.raw(o.number))?;
        out.raw(' ')?;
        Ok(())
    })
}

fn capture_by_move(out: &mut Transcript) -> Result<(), TourError> {
    let p1 = Box::new(String::from("a"));
    let print_boxed = |out: &mut Transcript, item: Box<String>| out.token(*item);
    print_boxed(out, p1)?;

    let p2 = Box::new(String::from("b"));
    let print_with_move = move |out: &mut Transcript| out.token(&p2);
    print_with_move(out)?;
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    basic(out)?;
    generic(out)?;
    capture(out)?;
    return_type(out)?;

    let multiplier = return_closure(3);
    out.token(multiplier())?;
    accept_closure(&|d| d > 0.0);

    mutable(out)?;
    access_statics()();
    immediate(out)?;
    nesting(out)?;
    out.token(format_args!("Fib(7)={}", fibonacci(7)))?;
    capture_by_move(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci() {
        let first: Vec<_> = (1..=8).map(fibonacci).collect();
        assert_eq!(first, [1, 1, 2, 3, 5, 8, 13, 21]);
        assert_eq!(fibonacci(0), -1, "Non-positive input should give the sentinel!");
    }

    #[test]
    fn test_returned_closure_owns_its_capture() {
        let closures: Vec<_> = (1..=3).map(return_closure).collect();
        assert_eq!(closures.iter().map(|f| f()).collect::<Vec<_>>(), [2, 4, 6]);
    }

    #[test]
    fn test_times_three() {
        assert_eq!(times_three(2_i32), 6);
        assert_eq!(times_three(0.5_f64), 1.5);
    }

    #[test]
    fn test_cat_mixes_operand_types() {
        assert_eq!(cat(String::from("x"), "y"), "xy");
        assert_eq!(cat(1.5, 2.0), 3.5);
    }

    #[test]
    fn test_lambda_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(
            out.as_str(),
            "8 1 123 6 2 3 ab 8 qq 7 7 0.5 8 1.5 64 6 4 7 11 15 1 1 012-0 012-3 A Aye! 8 \
             A:12 B:34 C:56 Fib(7)=13 a b "
        );
    }

    #[test]
    fn test_mutable_captures_leave_the_originals_alone() {
        let mut out = Transcript::new();
        mutable(&mut out).unwrap();
        assert!(out.as_str().starts_with("4 7 11 15 1 1 "), "Only the closure's copies change!");
    }
}
