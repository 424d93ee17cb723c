//! A module containing pseudorandom number generators and the topic that exercises them.
//!
//! [`Lcg`] is the small linear congruential generator behind the classic `rand()` function and
//! [`Mt19937`] is the 32-bit Mersenne twister. Both plug into the `rand` ecosystem through
//! [`RngCore`](rand::RngCore) and [`SeedableRng`](rand::SeedableRng), which is how
//! [`StandardNormal`] can draw from either of them.

mod lcg;
mod mt19937;
mod normal;
mod tests;

pub use lcg::*;
pub use mt19937::*;
pub use normal::*;

use chrono::Utc;
use rand::distributions::Distribution;
use tracing::debug;

use crate::conversion::format_general;
use crate::tour::{TourError, Transcript};

/// Seconds since the epoch, truncated to the width of a classic seed.
pub fn clock_seed() -> u32 {
    Utc::now().timestamp() as u32
}

/// Draws ten values from `a..=b` into one token, with `sep` after every value.
fn draw_row(
    out: &mut Transcript,
    rng: &mut Lcg,
    (a, b): (i32, i32),
    sep: &str,
) -> Result<(), TourError> {
    for _ in 0..10 {
        out.raw(format_args!("{}{sep}", scale_and_shift(rng, a, b)))?;
    }
    out.raw(' ')?;
    Ok(())
}

/// Integers scaled and shifted into a handful of ranges.
pub fn random_numbers(rng: &mut Lcg, out: &mut Transcript) -> Result<(), TourError> {
    draw_row(out, rng, (0, 1), "")?;
    draw_row(out, rng, (1, 2), "")?;
    draw_row(out, rng, (0, 9), "")?;
    draw_row(out, rng, (1, 100), ",")?;
    draw_row(out, rng, (4, 10), "")?;
    draw_row(out, rng, (-1, 1), ",")?;
    draw_row(out, rng, (-3, 11), ",")?;
    Ok(())
}

/// The smallest and largest of many floats drawn from `[2, 5)`.
pub fn float_extremes(rng: &mut Lcg, draws: usize) -> (f32, f32) {
    let mut min = 10.0_f32;
    let mut max = 0.0_f32;
    for _ in 0..draws {
        let f = rand_float(rng, 2.0, 5.0);
        min = min.min(f);
        max = max.max(f);
    }
    (min, max)
}

/// Normally distributed samples drawn through the Mersenne twister.
pub fn normal_samples(twister: &mut Mt19937, out: &mut Transcript) -> Result<(), TourError> {
    out.token("Mersenne twister:")?;
    for sample in StandardNormal.sample_iter(&mut *twister).take(9) {
        out.raw(format_args!("{},", format_general(f64::from(sample), 2)))?;
    }
    Ok(())
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    let seed = clock_seed();
    debug!(seed, "seeded rand");
    let mut rng = Lcg::new(seed);
    random_numbers(&mut rng, out)?;

    let (min, max) = float_extremes(&mut rng, 2000);
    out.token(format_args!("min={}", format_general(f64::from(min), 10)))?;
    out.token(format_args!("max={}", format_general(f64::from(max), 10)))?;

    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    debug!(seed = nanos, "seeded Mersenne twister");
    let mut twister = Mt19937::new(nanos as u32);
    normal_samples(&mut twister, out)?;
    Ok(())
}
