//! Conversions between types: truncating numeric casts, checked downcasts through trait objects,
//! interior mutability in place of casting away constness, and bit-level reinterpretation.

use std::any::Any;
use std::cell::Cell;

use crate::exceptions::BadCast;
use crate::tour::{TourError, Transcript};

pub trait Shape {
    fn draw(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Circle;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rectangle;

impl Shape for Circle {
    fn draw(&self) -> &'static str {
        "Circle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Shape for Rectangle {
    fn draw(&self) -> &'static str {
        "Rectangle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Downcasts `shape`, yielding [`None`] when it is some other concrete type.
pub fn downcast<T: Any>(shape: &dyn Shape) -> Option<&T> {
    shape.as_any().downcast_ref::<T>()
}

/// Downcasts `shape`, treating a mismatch as an error rather than an empty result.
pub fn downcast_checked<T: Any>(shape: &dyn Shape) -> Result<&T, BadCast> {
    downcast(shape).ok_or(BadCast)
}

/// Draws `shape` only if it is a circle.
pub fn draw_circle(shape: &dyn Shape) -> Option<&'static str> {
    downcast::<Circle>(shape).map(Circle::draw)
}

/// Truncates toward zero, the way an `as` cast from float to integer always does.
pub const fn truncate(value: f32) -> i32 {
    value as i32
}

/// Mutates through a shared reference. The only sound way to do this is a type that opts in to
/// interior mutability.
pub fn bump(counter: &Cell<i32>) -> i32 {
    counter.set(counter.get() + 1);
    counter.get()
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    out.token(truncate(56.7 / 2.0))?;
    out.token(truncate(4.9))?;
    let n = 1;
    out.token(n != 0)?;

    let shapes: [&dyn Shape; 3] = [&Circle, &Rectangle, &Circle];
    for shape in shapes {
        if let Some(drawn) = draw_circle(shape) {
            out.token(drawn)?;
        }
    }

    match downcast_checked::<Circle>(&Rectangle) {
        Ok(circle) => out.token(circle.draw())?,
        Err(err) => out.token(format_args!("Rectangle:{err}"))?,
    }

    match u8::try_from(300_i32) {
        Ok(narrow) => out.token(narrow)?,
        Err(_) => out.token("300:overflow")?,
    }

    let counter = Cell::new(41);
    out.token(bump(&counter))?;

    let bits = 1.5_f32.to_bits();
    out.token(format_args!("{bits:08x}"))?;
    out.token(f32::from_bits(bits))?;
    out.token(u32::from_le_bytes([1, 0, 0, 0]))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation() {
        assert_eq!(truncate(56.7 / 2.0), 28);
        assert_eq!(truncate(4.9), 4);
        assert_eq!(truncate(-4.9), -4, "Casting truncates toward zero, not down.");
    }

    #[test]
    fn test_downcasts() {
        assert_eq!(downcast::<Circle>(&Circle), Some(&Circle));
        assert!(downcast::<Circle>(&Rectangle).is_none());
        assert_eq!(downcast_checked::<Rectangle>(&Circle), Err(BadCast));
        assert_eq!(draw_circle(&Rectangle), None);
    }

    #[test]
    fn test_casting_topic() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(
            out.as_str(),
            "28 4 true Circle Circle Rectangle:bad cast 300:overflow 42 3fc00000 1.5 1 "
        );
    }
}
