use std::f32::consts::TAU;

use rand::Rng;
use rand::distributions::Distribution;

/// The normal distribution with mean 0 and variance 1, sampled with the Box-Muller transform.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StandardNormal;

impl Distribution<f32> for StandardNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        // Uniform samples fall in [0, 1), flip them to (0, 1] so the logarithm stays finite.
        let u1 = 1.0 - rng.r#gen::<f32>();
        let u2 = rng.r#gen::<f32>();
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }
}
