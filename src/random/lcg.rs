use rand::{Error, RngCore, SeedableRng};

/// The largest value [`Lcg::rand`] returns.
pub const RAND_MAX: u32 = 32767;

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;

/// The linear congruential generator of the classic C library `rand()`.
///
/// Each step yields 15 bits, taken from bits 16 to 30 of the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const fn new(seed: u32) -> Lcg {
        Lcg { state: seed }
    }

    /// The next value in `0..=RAND_MAX`.
    pub fn rand(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 16) & RAND_MAX
    }
}

impl Default for Lcg {
    /// Seeded with 1, the seed `rand()` uses before anything calls `srand`.
    fn default() -> Self {
        Lcg::new(1)
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        // Three draws cover all 32 bits.
        (self.rand() << 30) ^ (self.rand() << 15) ^ self.rand()
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Lcg::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Lcg::new(state as u32)
    }
}

/// A uniform integer in `a..=b`, made by scaling `rand()` with a remainder and shifting it.
pub fn scale_and_shift(rng: &mut Lcg, a: i32, b: i32) -> i32 {
    let width = (b - a + 1) as u32;
    a + (rng.rand() % width) as i32
}

/// A float between `min` and `max`, made by dividing `rand()` by its maximum.
pub fn rand_float(rng: &mut Lcg, min: f32, max: f32) -> f32 {
    (rng.rand() % RAND_MAX) as f32 / RAND_MAX as f32 * (max - min) + min
}
