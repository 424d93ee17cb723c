//! Functions defined in terms of themselves: enumeration, powers, greatest common divisors,
//! factorials and the Tower of Hanoi.

use std::fmt::Display;

use crate::tour::{TourError, Transcript};

/// Writes `values` front to back, one element per call.
pub fn print_forward<T: Display>(out: &mut Transcript, values: &[T]) -> Result<(), TourError> {
    match values.split_first() {
        Some((first, rest)) => {
            out.token(first)?;
            print_forward(out, rest)
        },
        None => Ok(()),
    }
}

/// Writes `values` back to front, one element per call.
pub fn print_reverse<T: Display>(out: &mut Transcript, values: &[T]) -> Result<(), TourError> {
    match values.split_last() {
        Some((last, rest)) => {
            out.token(last)?;
            print_reverse(out, rest)
        },
        None => Ok(()),
    }
}

pub fn power(base: i64, exp: u32) -> i64 {
    match exp {
        0 => 1,
        _ => base * power(base, exp - 1),
    }
}

/// The greatest common divisor by Euclid's algorithm. `gcd(a, 0)` is `a`.
pub fn gcd(a: u32, b: u32) -> u32 {
    match b {
        0 => a,
        _ if a % b == 0 => b,
        _ => gcd(b, a % b),
    }
}

pub fn factorial(n: u64) -> u64 {
    match n {
        0 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Computes `n!` while drawing the call tree, one line per call and per return.
pub fn visualize_factorial(out: &mut Transcript, n: u64) -> Result<u64, TourError> {
    fn visit(out: &mut Transcript, n: u64, depth: usize) -> Result<u64, TourError> {
        out.raw("|  ".repeat(depth))?;
        out.raw(format_args!("call factorial({n})"))?;
        out.newline()?;

        if n <= 1 {
            out.raw("|  ".repeat(depth))?;
            out.raw("return 1 = factorial(1)")?;
            out.newline()?;
            return Ok(1);
        }

        let f = n * visit(out, n - 1, depth + 1)?;
        out.raw("|  ".repeat(depth))?;
        out.raw(format_args!("return {f} = {n}*factorial({})", n - 1))?;
        out.newline()?;
        Ok(f)
    }

    visit(out, n, 0)
}

/// A single move of the top disk of one peg onto another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: u8,
    pub to: u8,
}

/// The moves that carry `disks` disks from `source` to `dest`, using `temp` as a holding area.
pub fn hanoi(disks: u32, source: u8, dest: u8, temp: u8) -> Vec<Move> {
    fn solve(disks: u32, source: u8, dest: u8, temp: u8, moves: &mut Vec<Move>) {
        if disks > 0 {
            solve(disks - 1, source, temp, dest, moves);
            moves.push(Move {
                from: source,
                to: dest,
            });
            solve(disks - 1, temp, dest, source, moves);
        }
    }

    let mut moves = Vec::new();
    solve(disks, source, dest, temp, &mut moves);
    moves
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    let a = [0, 1, 2, 3, 4];
    print_forward(out, &a)?;
    out.newline()?;
    print_reverse(out, &a)?;
    out.newline()?;

    for (base, exp) in [(2, 8), (5, 4), (11, 2)] {
        out.token(format_args!("{base}^{exp}={}", power(base, exp)))?;
    }
    out.newline()?;

    for (a, b) in [(48, 18), (45, 60), (60, 45)] {
        out.token(format_args!("GCD({a},{b})={}", gcd(a, b)))?;
    }
    out.newline()?;

    for n in [7, 10, 13] {
        out.token(format_args!("{n}!={}", factorial(n)))?;
    }
    out.newline()?;

    let result = visualize_factorial(out, 5)?;
    out.token(format_args!("5!={result}"))?;
    out.newline()?;

    for Move { from, to } in hanoi(3, 1, 3, 2) {
        out.raw(format_args!("{from} -> {to}"))?;
        out.newline()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_power() {
        assert_eq!(power(2, 8), 256);
        assert_eq!(power(7, 0), 1);
        assert_eq!(power(-3, 3), -27);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(45, 60), 15);
        assert_eq!(gcd(60, 45), 15);
        assert_eq!(gcd(9, 0), 9, "Zero should leave the other argument!");
    }

    #[test]
    fn test_factorial_trace() {
        let mut out = Transcript::new();
        assert_eq!(visualize_factorial(&mut out, 3).unwrap(), 6);
        assert_eq!(
            out.as_str(),
            concat!(
                "call factorial(3)\n",
                "|  call factorial(2)\n",
                "|  |  call factorial(1)\n",
                "|  |  return 1 = factorial(1)\n",
                "|  return 2 = 2*factorial(1)\n",
                "return 6 = 3*factorial(2)\n",
            )
        );
    }

    #[test]
    fn test_hanoi() {
        let moves: Vec<(u8, u8)> = hanoi(3, 1, 3, 2).into_iter().map(|m| (m.from, m.to)).collect();
        assert_eq!(moves, [(1, 3), (1, 2), (3, 2), (1, 3), (2, 1), (2, 3), (1, 3)]);
        assert!(hanoi(0, 1, 3, 2).is_empty());
    }

    #[test]
    fn test_enumeration() {
        let mut out = Transcript::new();
        print_forward(&mut out, &[1, 2, 3]).unwrap();
        print_reverse(&mut out, &[1, 2, 3]).unwrap();
        print_forward::<i32>(&mut out, &[]).unwrap();
        assert_eq!(out.as_str(), "1 2 3 3 2 1 ");
    }

    #[test]
    fn test_recursion_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        let lines: Vec<&str> = out.as_str().lines().collect();
        assert_eq!(lines[0], "0 1 2 3 4 ");
        assert_eq!(lines[1], "4 3 2 1 0 ");
        assert_eq!(lines[2], "2^8=256 5^4=625 11^2=121 ");
        assert_eq!(lines[3], "GCD(48,18)=6 GCD(45,60)=15 GCD(60,45)=15 ");
        assert_eq!(lines[4], "7!=5040 10!=3628800 13!=6227020800 ");
        assert_eq!(lines[5], "call factorial(5)");
        assert_eq!(lines[14], "return 120 = 5*factorial(4)");
        assert_eq!(lines[15], "5!=120 ");
        assert_eq!(&lines[16..], ["1 -> 3", "1 -> 2", "3 -> 2", "1 -> 3", "2 -> 1", "2 -> 3", "1 -> 3"]);
    }

    proptest! {
        #[test]
        fn test_hanoi_move_count(disks in 0_u32..10) {
            prop_assert_eq!(hanoi(disks, 1, 3, 2).len(), (1_usize << disks) - 1);
        }

        #[test]
        fn test_gcd_divides_both(a in 1_u32..10_000, b in 1_u32..10_000) {
            let d = gcd(a, b);
            prop_assert_eq!(a % d, 0);
            prop_assert_eq!(b % d, 0);
        }
    }
}
