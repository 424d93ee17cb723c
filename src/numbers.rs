//! Sizes, rounding, limits, digits, swapping and numeric literals, plus a small generic
//! [`Complex`] number type.

use std::fmt::{self, Display, Formatter};
use std::mem;
use std::ops::{Add, Mul, Sub};

use tracing::trace;

use crate::tour::{TourError, Transcript};

/// Rounds `x` to `places` decimals, with halves rounding up.
pub fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (x * scale + 0.5).floor() / scale
}

/// Drops everything after `places` decimals, rounding towards negative infinity.
pub fn truncate_to(x: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (x * scale).floor() / scale
}

/// The four lowest decimal digits of `n`, most significant first, using division and remainder.
pub const fn digits(n: u32) -> [u32; 4] {
    [n / 1000 % 10, n % 1000 / 100, n % 100 / 10, n % 10]
}

/// The same digits again, peeled off the low end one at a time.
pub fn digits_by_peeling(mut n: u32) -> [u32; 4] {
    let mut digits = [0; 4];
    for slot in digits.iter_mut().rev() {
        *slot = n % 10;
        n /= 10;
    }
    digits
}

pub fn xor_swap(a: &mut i32, b: &mut i32) {
    *a ^= *b;
    *b ^= *a;
    *a ^= *b;
}

/// A complex number over any numeric component type.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Complex<T> {
        Complex { re, im }
    }
}

impl Complex<f64> {
    /// The imaginary unit.
    pub const I: Complex<f64> = Complex::new(0.0, 1.0);
}

impl<T: Add<Output = T>> Add for Complex<T> {
    type Output = Complex<T>;

    fn add(self, rhs: Complex<T>) -> Complex<T> {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T> Mul for Complex<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    type Output = Complex<T>;

    fn mul(self, rhs: Complex<T>) -> Complex<T> {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Display + PartialOrd + Default> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.im < T::default() {
            write!(f, "{}{}i", self.re, self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

fn sizes(out: &mut Transcript) -> Result<(), TourError> {
    let n = 0_i32;
    out.token(mem::size_of::<i32>())?;
    out.token(mem::size_of_val(&n))?;
    Ok(())
}

fn rounding(out: &mut Transcript) -> Result<(), TourError> {
    let r = 2.5176;
    for places in 1..=3 {
        out.token(format_args!("{:.4}", round_to(r, places)))?;
    }
    out.token(format_args!("{:.4}", truncate_to(r, 2)))?;

    out.token(format_args!("ceil(9.2)={:.1}", 9.2_f64.ceil()))?;
    out.token(format_args!("ceil(-9.8)={:.1}", (-9.8_f64).ceil()))?;
    out.token(format_args!("floor(9.2)={:.1}", 9.2_f64.floor()))?;
    out.token(format_args!("floor(-9.8)={:.1}", (-9.8_f64).floor()))?;
    Ok(())
}

fn limits() {
    trace!(
        max_int = i32::MAX,
        max_float = f32::MAX,
        max_double = f64::MAX,
        epsilon = f64::EPSILON,
        char_is_signed = i8::MIN < 0,
        "numeric limits"
    );
}

fn show_digits(out: &mut Transcript) -> Result<(), TourError> {
    for digits in [digits(8125), digits_by_peeling(8125)] {
        for d in digits {
            out.raw(d)?;
        }
        out.raw(' ')?;
    }
    Ok(())
}

fn swap_numbers(out: &mut Transcript) -> Result<(), TourError> {
    let (mut n1, mut n2) = (3, 8);
    xor_swap(&mut n1, &mut n2);
    out.token(n1)?;
    out.token(n2)?;
    Ok(())
}

fn literals(out: &mut Transcript) -> Result<(), TourError> {
    let m = 0b001010110;
    out.token(m)?;

    let n1 = 1_000_000;
    let n2 = 1_00_0_00_0;
    debug_assert_eq!(n1, n2);
    out.token(n1)?;

    let a = Complex::new(1.0, 2.0);
    let b = Complex::I * a;
    out.token(b)?;
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    sizes(out)?;
    rounding(out)?;
    limits();
    show_digits(out)?;
    swap_numbers(out)?;
    literals(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_rounding_policy() {
        assert_eq!(round_to(2.5176, 2), 2.52);
        assert_eq!(round_to(2.345, 0), 2.0);
        assert_eq!(round_to(-2.5, 0), -2.0, "Halves should round towards positive infinity!");
        assert_eq!(truncate_to(2.5176, 2), 2.51);
    }

    #[test]
    fn test_complex() {
        let b = Complex::I * Complex::new(1.0, 2.0);
        assert_eq!(b, Complex::new(-2.0, 1.0));
        assert_eq!(b.to_string(), "-2+1i");
        assert_eq!(Complex::new(1, -3).to_string(), "1-3i");
        assert_eq!(Complex::new(1, 2) + Complex::new(3, 4), Complex::new(4, 6));
    }

    #[test]
    fn test_numbers_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(
            out.as_str(),
            "4 4 2.5000 2.5200 2.5180 2.5100 ceil(9.2)=10.0 ceil(-9.8)=-9.0 floor(9.2)=9.0 \
             floor(-9.8)=-10.0 8125 8125 8 3 86 1000000 -2+1i "
        );
    }

    proptest! {
        #[test]
        fn prop_digit_methods_agree(n in 0_u32..10_000) {
            prop_assert_eq!(digits(n), digits_by_peeling(n));
        }

        #[test]
        fn prop_xor_swap_matches_swap(a: i32, b: i32) {
            let (mut x, mut y) = (a, b);
            xor_swap(&mut x, &mut y);
            prop_assert_eq!((x, y), (b, a));
        }
    }
}
