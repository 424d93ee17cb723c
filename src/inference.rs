//! Type inference: what `let` deduces from an initializer, generic return types that follow their
//! arguments, and type aliases.

use std::any;
use std::ops::Mul;

use crate::tour::{TourError, Transcript};

/// Strips module paths from a type name, so `alloc::vec::Vec<i32>` becomes `Vec<i32>`.
pub fn short_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut rest = full;
    while let Some(pos) = rest.find("::") {
        let (head, tail) = rest.split_at(pos);
        short.push_str(head.trim_end_matches(|c: char| c.is_alphanumeric() || c == '_'));
        rest = &tail[2..];
    }
    short.push_str(rest);
    short
}

/// The short name of the type deduced for `value`.
pub fn deduced<T: ?Sized>(value: &T) -> String {
    short_name(any::type_name_of_val(value))
}

/// The result type follows whatever multiplying the two arguments yields.
pub fn multiply<X: Mul<Y>, Y>(x: X, y: Y) -> X::Output {
    x * y
}

/// Hands back the same place it was given, so the caller can assign through the result.
pub fn identity(x: &mut i32) -> &mut i32 {
    x
}

pub fn func(_: f64) -> i32 {
    1
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Book;

#[derive(Debug, Default)]
pub struct SomeClass;

impl SomeClass {
    pub const fn some_member_function(&self) -> i32 {
        0
    }
}

pub const fn some_function(_: i32) -> i32 {
    0
}

pub type UChar = u8;
pub type PtrArrayPtrInt<'a> = &'a [&'a i32; 7];
pub type ArrayArrayPtrInt<'a> = [[&'a i32; 3]; 2];
pub type PFun = fn(i32) -> i32;
pub type MFun = fn(&SomeClass) -> i32;

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    let a = 1.0;
    let (b, c) = (2.0, 3.0_f32);
    out.token(deduced(&a))?;
    out.token(deduced(&(b, c)))?;

    // A binding copies or borrows exactly as written; nothing is stripped behind the scenes.
    let values = vec![1, 2, 3];
    let owned = values.clone();
    let borrowed = &values;
    out.token(deduced(&owned))?;
    out.token(deduced(&borrowed))?;

    // Arrays keep their length and function items keep their identity until coerced.
    let books = [Book; 10];
    let copied = books;
    let referenced = &books;
    out.token(deduced(&copied))?;
    out.token(deduced(&referenced))?;

    let item = func;
    let pointer: fn(f64) -> i32 = func;
    out.token(deduced(&item))?;
    out.token(format_args!("[{}]", deduced(&pointer)))?;

    let mut nums = vec![1, 2, 3];
    for num in nums.iter_mut() {
        *num = 2;
    }
    out.token(nums.iter().sum::<i32>())?;

    let product = multiply(3.0_f64, 2.5_f64);
    out.token(format_args!("{}:{}", product, deduced(&product)))?;

    let mut i = 1;
    *identity(&mut i) = 2;
    out.token(i)?;

    let small: UChar = 200;
    let action1: PFun = some_function;
    let action2: MFun = SomeClass::some_member_function;
    let obj = SomeClass;
    out.token(small)?;
    out.token(action1(5))?;
    out.token(action2(&obj))?;

    Ok(())
}
