//! Literal initialization, zero values, rejected narrowing and list-taking constructors.

use crate::exceptions::{Exception, RangeError};
use crate::tour::{TourError, Transcript};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Book;

/// Which constructor built a [`P`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MadeBy {
    Pair,
    List,
}

impl MadeBy {
    pub const fn name(self) -> &'static str {
        match self {
            MadeBy::Pair => "pair",
            MadeBy::List => "list",
        }
    }
}

/// Built from two scalars or from a list of any length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P {
    pub first: Option<i32>,
    pub last: Option<i32>,
    pub made_by: MadeBy,
}

impl P {
    pub const fn from_pair(a: i32, b: i32) -> P {
        P {
            first: Some(a),
            last: Some(b),
            made_by: MadeBy::Pair,
        }
    }
}

impl<const N: usize> From<[i32; N]> for P {
    fn from(values: [i32; N]) -> Self {
        P {
            first: values.first().copied(),
            last: values.last().copied(),
            made_by: MadeBy::List,
        }
    }
}

/// Converts implicitly from a pair, but three values need the named constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct R {
    pub values: [i32; 3],
}

impl R {
    pub const fn new3(a: i32, b: i32, c: i32) -> R {
        R { values: [a, b, c] }
    }
}

impl From<(i32, i32)> for R {
    fn from((a, b): (i32, i32)) -> Self {
        R { values: [a, b, 0] }
    }
}

fn fr(r: &R) -> i32 {
    r.values.iter().sum()
}

/// Narrows `value` to a byte, refusing anything that would lose information.
pub fn narrow(value: i64) -> Result<u8, RangeError> {
    u8::try_from(value).map_err(|_| RangeError::new("narrowing rejected"))
}

/// Writes every value of the list back to back.
pub fn print_list(out: &mut Transcript, values: &[i32]) -> Result<(), TourError> {
    for value in values {
        out.raw(value)?;
    }
    out.raw(' ')?;
    Ok(())
}

fn uniform() {
    let a = 2;
    let b = Book;
    let values = [1, 2, 3];
    let v = vec![2, 3, 5, 7, 11, 13, 17];
    let cities = vec!["Berlin", "New York", "London", "Toronto", "Cairo", "Warsaw"];
    let c = (4.0_f64, 3.0_f64);
    debug_assert!(a == 2 && b == Book && values.len() == 3 && v.len() == 7);
    debug_assert!(cities.len() == 6 && c.0 > c.1);
}

fn value_initialized() {
    let j = i32::default();
    let q: Option<&i32> = Default::default();
    debug_assert_eq!((j, q), (0, None));
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    uniform();
    value_initialized();

    // A float never turns into an integer without an explicit cast.
    let x1 = 5.3_f64 as i32;
    let c1 = narrow(7).map_err(Exception::from)?;
    debug_assert_eq!((x1, c1), (5, 7));

    print_list(out, &[3, 2, 1])?;

    let p1 = P::from_pair(77, 5);
    let p2 = P::from([77, 5]);
    let p3 = P::from([77, 5, 42]);
    out.tokens([p1, p2, p3].map(|p| p.made_by.name()))?;

    let r1: R = (77, 5).into();
    let r2 = R::new3(77, 5, 42);
    debug_assert_eq!(fr(&r1) + fr(&R::from((47, 11))), 140);
    debug_assert_eq!(fr(&r2), 124);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowing_is_rejected() {
        assert_eq!(narrow(7), Ok(7));
        assert_eq!(
            narrow(99_999).unwrap_err().to_string(),
            "narrowing rejected",
            "99999 doesn't fit in a byte!"
        );
        assert!(narrow(-1).is_err());
        assert_eq!(i32::try_from(99_999_i64), Ok(99_999));
    }

    #[test]
    fn test_list_constructor() {
        let p = P::from([77, 5, 42]);
        assert_eq!((p.first, p.last, p.made_by), (Some(77), Some(42), MadeBy::List));
        assert_eq!(P::from([] as [i32; 0]).first, None);
        assert_eq!(P::from_pair(77, 5).made_by, MadeBy::Pair);
    }

    #[test]
    fn test_r_conversions() {
        assert_eq!(R::from((1, 2)).values, [1, 2, 0]);
        assert_eq!(R::new3(1, 2, 3).values, [1, 2, 3]);
    }

    #[test]
    fn test_initialization_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(out.as_str(), "321 pair list list ");
    }
}
