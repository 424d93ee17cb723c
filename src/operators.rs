//! Comparison and arithmetic operators on user types, including mixed operand types.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, Neg};

use crate::tour::{TourError, Transcript};

/// Books compare by price, against each other and against a bare price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub price: i32,
}

impl Book {
    pub fn new<S: Into<String>>(title: S, author: S, price: i32) -> Book {
        Book {
            title: title.into(),
            author: author.into(),
            price,
        }
    }
}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Book) -> Option<Ordering> {
        self.price.partial_cmp(&other.price)
    }
}

impl PartialEq<i32> for Book {
    fn eq(&self, price: &i32) -> bool {
        self.price == *price
    }
}

impl PartialOrd<i32> for Book {
    fn partial_cmp(&self, price: &i32) -> Option<Ordering> {
        self.price.partial_cmp(price)
    }
}

impl PartialEq<Book> for i32 {
    fn eq(&self, book: &Book) -> bool {
        *self == book.price
    }
}

impl PartialOrd<Book> for i32 {
    fn partial_cmp(&self, book: &Book) -> Option<Ordering> {
        self.partial_cmp(&book.price)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const fn new(x: f32, y: f32) -> Vector2D {
        Vector2D { x, y }
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vector2D {
    type Output = Vector2D;

    fn mul(self, f: f32) -> Vector2D {
        Vector2D::new(self.x * f, self.y * f)
    }
}

impl Mul<Vector2D> for f32 {
    type Output = Vector2D;

    fn mul(self, v: Vector2D) -> Vector2D {
        v * self
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Display for Vector2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn books(out: &mut Transcript) -> Result<(), TourError> {
    let b1 = Book::new("AAA", "Author1", 100);
    let b2 = Book::new("BBB", "Author2", 80);

    if b1 < b2 {
        out.token(format_args!("{} is cheaper than {},", b1.title, b2.title))?;
    } else {
        out.token(format_args!("{} is more expensive than {},", b1.title, b2.title))?;
    }

    if b2 < 90 {
        out.token(format_args!("{} costs less than $90,", b2.title))?;
    } else {
        out.token(format_args!("{} costs more than $90,", b2.title))?;
    }

    if 200 < b1 {
        out.token(format_args!("{} costs more than $200,", b1.title))?;
    } else {
        out.token(format_args!("{} costs less than $200,", b1.title))?;
    }
    Ok(())
}

fn vectors(out: &mut Transcript) -> Result<(), TourError> {
    let vec = Vector2D::new(1.0, 2.0);
    let v1 = 2.0 * vec;
    let v2 = vec * 3.0;
    out.token(format_args!("v1={v1}"))?;
    out.token(format_args!("v2={v2}"))?;
    out.token(format_args!("v1+v2={}", v1 + v2))?;

    let mut v3 = Vector2D::new(3.0, 4.0);
    v3 += v1;
    out.token(format_args!("v3={v3}"))?;
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    books(out)?;
    vectors(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_comparisons() {
        let cheap = Book::new("A", "X", 10);
        let pricey = Book::new("B", "Y", 20);
        assert!(cheap < pricey);
        assert!(cheap < 11 && cheap > 9 && cheap == 10);
        assert!(15 < pricey && 25 > pricey);
        assert_ne!(cheap, Book::new("A", "X", 11), "Equality should still compare every field!");
    }

    #[test]
    fn test_vector_arithmetic() {
        let v = Vector2D::new(1.5, -2.0);
        assert_eq!(v + (-v), Vector2D::default());
        assert_eq!(2.0 * v, v * 2.0, "Scaling should commute!");
        assert_eq!(v.to_string(), "(1.5, -2)");
    }

    #[test]
    fn test_operators_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(
            out.as_str(),
            "AAA is more expensive than BBB, BBB costs less than $90, AAA costs less than $200, \
             v1=(2, 4) v2=(3, 6) v1+v2=(5, 10) v3=(5, 8) "
        );
    }
}
