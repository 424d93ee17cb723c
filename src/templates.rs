//! Generic types and functions, trait-based specialization, declarative macros standing in for
//! variadic packs, and compile-time evaluation.

use std::cmp::Ordering;
use std::ops::AddAssign;

use static_assertions::const_assert_eq;

use crate::numbers::Complex;
use crate::tour::{FAILURE_MARKER, TourError, Transcript};

pub fn sum_and_product(a: i32, b: i32) -> (i32, i32) {
    (a + b, a * b)
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Triple<T1, T2, T3> {
    pub first: T1,
    pub second: T2,
    pub third: T3,
}

impl<T1, T2, T3> Triple<T1, T2, T3> {
    pub const fn new(first: T1, second: T2, third: T3) -> Triple<T1, T2, T3> {
        Triple {
            first,
            second,
            third,
        }
    }
}

/// The sum, product and average of three values.
///
/// Plain numbers get the obvious implementation. [`Complex`] numbers only take their real parts
/// into account and report plain numbers back.
pub trait SumProductAverage: Sized {
    type Output;

    fn sum_product_average(a: Self, b: Self, c: Self) -> Triple<Self::Output, Self::Output, Self::Output>;
}

macro_rules! sum_product_average_numeric {
    ($($t:ty),*) => {
        $(
            impl SumProductAverage for $t {
                type Output = $t;

                fn sum_product_average(a: $t, b: $t, c: $t) -> Triple<$t, $t, $t> {
                    let sum = a + b + c;
                    Triple::new(sum, a * b * c, sum / (3 as $t))
                }
            }
        )*
    };
}

sum_product_average_numeric!(i32, i64, u32, u64, f32, f64);

impl SumProductAverage for Complex<f64> {
    type Output = f64;

    fn sum_product_average(a: Self, b: Self, c: Self) -> Triple<f64, f64, f64> {
        f64::sum_product_average(a.re, b.re, c.re)
    }
}

/// A running total of anything that can be added onto `T`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Accumulator<T> {
    total: T,
}

impl<T> Accumulator<T> {
    pub const fn new(start: T) -> Accumulator<T> {
        Accumulator { total: start }
    }

    pub fn add<U>(&mut self, value: U) -> &T
    where
        T: AddAssign<U>,
    {
        self.total += value;
        &self.total
    }

    /// Adds what `item` contributes to a total, for item types that aren't totals themselves.
    pub fn add_item<I: Accumulate<Total = T>>(&mut self, item: &I) -> &T
    where
        T: AddAssign,
    {
        self.total += item.contribution();
        &self.total
    }

    pub fn total(&self) -> T
    where
        T: Clone,
    {
        self.total.clone()
    }
}

/// Items that add only part of themselves to an [`Accumulator`].
pub trait Accumulate {
    type Total;

    fn contribution(&self) -> Self::Total;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    pub price: f32,
}

impl Book {
    pub fn new<S: Into<String>>(title: S, price: f32) -> Book {
        Book {
            title: title.into(),
            price,
        }
    }
}

impl Accumulate for Book {
    type Total = f32;

    fn contribution(&self) -> f32 {
        self.price
    }
}

pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// Converts a value into the type of `like`, truncating where the conversion narrows.
pub trait ConvertLike<T> {
    fn convert_like(self, like: &T) -> T;
}

macro_rules! convert_like_numeric {
    ($($to:ty),*) => {
        $(convert_like_numeric!(@from $to; i32, i64, f32, f64);)*
    };
    (@from $to:ty; $($from:ty),*) => {
        $(
            impl ConvertLike<$to> for $from {
                fn convert_like(self, _like: &$to) -> $to {
                    self as $to
                }
            }
        )*
    };
}

convert_like_numeric!(i32, i64, f32, f64);

impl ConvertLike<String> for String {
    fn convert_like(self, _like: &String) -> String {
        self
    }
}

/// Adds up every argument, converting the running sum of the tail into the type of the head.
///
/// The result has the type of the first argument, so `adder!(1_i32, 2.2_f64)` is `3`.
#[macro_export]
macro_rules! adder {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::templates::ConvertLike::convert_like($crate::adder!($($rest),+), &first);
        first + &rest
    }};
}

/// Adds up every argument as an `f64`.
#[macro_export]
macro_rules! adder_sum {
    ($($value:expr),+ $(,)?) => {
        0.0_f64 $(+ f64::from($value))+
    };
}

/// Whether the first argument equals any of the others, checked one argument at a time.
#[macro_export]
macro_rules! matches_any {
    ($target:expr, $candidate:expr $(,)?) => {
        $target == $candidate
    };
    ($target:expr, $candidate:expr, $($rest:expr),+ $(,)?) => {{
        let target = $target;
        target == $candidate || $crate::matches_any!(target, $($rest),+)
    }};
}

#[macro_export]
macro_rules! count_args {
    () => {
        0_usize
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        1_usize + $crate::count_args!($($tail),*)
    };
}

pub const fn factorial(n: u64) -> u64 {
    if n == 0 { 1 } else { n * factorial(n - 1) }
}

/// `N!` as an associated constant.
pub struct Factorial<const N: u64>;

impl<const N: u64> Factorial<N> {
    pub const VALUE: u64 = factorial(N);
}

const_assert_eq!(Factorial::<4>::VALUE, 24);
const_assert_eq!(Factorial::<0>::VALUE, 1);

pub fn increment<T, const N: u8>(i: &mut T) -> &mut T
where
    T: AddAssign + From<u8>,
{
    *i += T::from(N);
    i
}

/// [`increment`] by the usual step of one.
pub fn increment_by_one<T: AddAssign + From<u8>>(i: &mut T) -> &mut T {
    increment::<T, 1>(i)
}

/// The greatest element of `values` by their natural order.
pub fn find_extreme<T: Ord + Clone>(values: &[T]) -> Option<T> {
    find_extreme_by(values, T::cmp)
}

/// The greatest element of `values` according to `compare`.
pub fn find_extreme_by<T, C>(values: &[T], mut compare: C) -> Option<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> Ordering,
{
    values.iter().max_by(|a, b| compare(a, b)).cloned()
}

fn check(out: &mut Transcript, condition: bool) -> Result<(), TourError> {
    if !condition {
        out.token(FAILURE_MARKER)?;
    }
    Ok(())
}

fn print_triple<T: std::fmt::Display>(out: &mut Transcript, triple: &Triple<T, T, T>) -> Result<(), TourError> {
    out.token(format_args!("Sum:{},Prod:{},Avg:{}", triple.first, triple.second, triple.third))?;
    Ok(())
}

fn consuming(out: &mut Transcript) -> Result<(), TourError> {
    let (a, b) = (2, 3);
    let r1 = sum_and_product(a, b);
    out.token(format_args!("Sum:{},Prod:{}", r1.0, r1.1))?;
    let (sum, product) = r1;
    out.token(format_args!("Sum:{sum},Prod:{product}"))?;

    let c = 4;
    let r2 = (a + b + c, a * b * c, (a + b + c) / 3);
    out.token(format_args!("Sum:{},Prod:{},Avg:{}", r2.0, r2.1, r2.2))?;

    let mut entry1 = (1, String::from("A"), 11.1);
    let entry2 = <(i32, String, f64)>::default();
    debug_assert_eq!(entry2, (0, String::new(), 0.0));
    let mut entries = vec![
        (2, String::from("B"), 22.2),
        (3, String::from("C"), 33.3),
        (4, String::from("D"), 44.4),
    ];
    entry1.2 = 88.8;
    entries.insert(0, entry1);
    for (_, name, _) in &entries {
        out.raw(name)?;
    }
    out.raw(' ')?;
    Ok(())
}

fn classes(out: &mut Transcript) -> Result<(), TourError> {
    print_triple(out, &i32::sum_product_average(2, 3, 4))?;

    let mut accum = Accumulator::new(0_i32);
    accum.add(3_i32);
    accum.add(7_i32);
    out.token(accum.total())?;

    let mut accum2 = Accumulator::new(String::new());
    accum2.add("Hello");
    accum2.add("World");
    out.token(accum2.total())?;
    Ok(())
}

fn functions(out: &mut Transcript) -> Result<(), TourError> {
    let res = f64::sum_product_average(14.0, 5.0, -3.5);
    out.token(format_args!("Sum:{:.3},Prod:{:.3},Avg:{:.3}", res.first, res.second, res.third))?;

    let (p, q) = (2, 8);
    out.token(format_args!("min:{}", min(p, q)))?;
    out.token(format_args!("max:{}", max(p, q)))?;
    let (x, y) = ('e', 'c');
    out.token(format_args!("min:{}", min(x, y)))?;
    out.token(format_args!("max:{}", max(x, y)))?;
    let (f1, f2) = (3.4, 2.6);
    out.token(format_args!("min:{:.3}", min(f1, f2)))?;
    out.token(format_args!("max:{:.3}", max(f1, f2)))?;
    Ok(())
}

fn specialization(out: &mut Transcript) -> Result<(), TourError> {
    let (a, b, c) = (Complex::new(2.0, 3.0), Complex::new(3.0, 4.0), Complex::new(4.0, 5.0));
    print_triple(out, &Complex::<f64>::sum_product_average(a, b, c))?;

    let b1 = Book::new("A", 8.0);
    let b2 = Book::new("B", 0.8);
    let mut accum = Accumulator::new(0.0_f32);
    accum.add_item(&b1);
    accum.add_item(&b2);
    out.token(format_args!("{:.1}", accum.total()))?;
    Ok(())
}

fn variadic(out: &mut Transcript) -> Result<(), TourError> {
    out.token(adder!(1_i32, 2.2_f64, 3_i32, 4_i32))?;
    out.token(format_args!("{:.1}", adder_sum!(1_i32, 2.2_f64, 3_i32, 4_i32)))?;
    out.token(adder!(String::from("a"), String::from("b"), String::from("c")))?;

    check(out, !matches_any!(1, 2))?;
    check(out, matches_any!(1, 2 - 1))?;
    check(out, matches_any!(1, 2, 1))?;
    check(out, !matches_any!(1, 2, 3, 4, 5))?;
    let (x, y, z) = (String::from("A"), String::from("B"), String::from("A"));
    check(out, matches_any!(&x, &y, &z))?;

    out.token(count_args!(8, 'A', true))?;
    out.token(count_args!())?;
    Ok(())
}

fn metaprogramming(out: &mut Transcript) -> Result<(), TourError> {
    out.token(Factorial::<4>::VALUE)?;
    out.token(Factorial::<0>::VALUE)?;
    Ok(())
}

fn default_parameters(out: &mut Transcript) -> Result<(), TourError> {
    let mut nums = vec![6_i32, 2, 3, 4, 5, 1];
    for i in nums.iter_mut() {
        increment_by_one(i);
    }
    for i in nums.iter_mut() {
        increment::<_, 2>(i);
    }
    check(out, nums == [9, 5, 6, 7, 8, 4])?;

    if let Some(max) = find_extreme(&nums) {
        out.token(max)?;
    }
    if let Some(min) = find_extreme_by(&nums, |a: &i32, b: &i32| b.cmp(a)) {
        out.token(min)?;
    }
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    consuming(out)?;
    classes(out)?;
    functions(out)?;
    specialization(out)?;
    variadic(out)?;
    metaprogramming(out)?;
    default_parameters(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_product_average() {
        assert_eq!(i32::sum_product_average(2, 3, 4), Triple::new(9, 24, 3));
        assert_eq!(
            Complex::<f64>::sum_product_average(Complex::new(2.0, 3.0), Complex::new(3.0, 4.0), Complex::new(4.0, 5.0)),
            Triple::new(9.0, 24.0, 3.0),
            "Only the real parts should count!"
        );
    }

    #[test]
    fn test_accumulator() {
        let mut accum = Accumulator::new(1.5_f64);
        assert_eq!(*accum.add(2.0_f64), 3.5);

        let mut books = Accumulator::new(1.0_f32);
        books.add_item(&Book::new("A", 2.0));
        assert_eq!(books.total(), 3.0);
    }

    #[test]
    fn test_variadic_macros() {
        assert_eq!(adder!(5_i32), 5);
        assert_eq!(adder!(1_i32, 2.9_f64), 3, "The result should take the first argument's type!");
        assert_eq!(adder!(1.5_f64, 2_i32), 3.5);
        assert_eq!(adder_sum!(1_i32, 0.5_f32), 1.5);
        assert!(matches_any!("b", "a", "b"));
        assert!(!matches_any!('x', 'y'));
        assert_eq!(count_args!(1, 2, 3, 4), 4);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(5), 120);
        assert_eq!(Factorial::<10>::VALUE, 3_628_800);
    }

    #[test]
    fn test_defaults() {
        let mut n = 1_u64;
        increment_by_one(&mut n);
        increment::<_, 5>(&mut n);
        assert_eq!(n, 7);

        assert_eq!(find_extreme::<i32>(&[]), None);
        assert_eq!(find_extreme(&["b", "c", "a"]), Some("c"));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(3, 3), 3);
        assert_eq!(max(-1.0, 2.0), 2.0);
    }

    #[test]
    fn test_templates_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(
            out.as_str(),
            concat!(
                "Sum:5,Prod:6 Sum:5,Prod:6 Sum:9,Prod:24,Avg:3 ABCD ",
                "Sum:9,Prod:24,Avg:3 10 HelloWorld ",
                "Sum:15.500,Prod:-245.000,Avg:5.167 min:2 max:8 min:c max:e min:2.600 max:3.400 ",
                "Sum:9,Prod:24,Avg:3 8.8 ",
                "10 10.2 abc 3 0 ",
                "24 1 ",
                "9 4 ",
            )
        );
    }
}
