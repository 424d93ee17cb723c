#![cfg(test)]

use rand::distributions::Distribution;
use rand::{RngCore, SeedableRng};

use super::*;
use crate::tour::Transcript;

#[test]
fn test_lcg_matches_the_classic_sequence() {
    let mut rng = Lcg::default();
    let first: Vec<u32> = (0..3).map(|_| rng.rand()).collect();
    assert_eq!(first, [16838, 5758, 10113], "Seed 1 should reproduce the classic rand() values!");
}

#[test]
fn test_scale_and_shift_stays_in_range() {
    let mut rng = Lcg::new(42);
    for (a, b) in [(0, 1), (1, 100), (-3, 11), (4, 10)] {
        for _ in 0..500 {
            let n = scale_and_shift(&mut rng, a, b);
            assert!((a..=b).contains(&n), "{n} escaped {a}..={b}");
        }
    }
}

#[test]
fn test_float_extremes() {
    let (min, max) = float_extremes(&mut Lcg::new(7), 2000);
    assert!((2.0..2.1).contains(&min), "min {min} should sit near the bottom of the range");
    assert!((4.9..5.0).contains(&max), "max {max} should sit near the top of the range");
}

#[test]
fn test_mt19937_reference_output() {
    let mut twister = Mt19937::default();
    let ten_thousandth = (0..10_000).map(|_| twister.extract()).last();
    assert_eq!(ten_thousandth, Some(4_123_659_995));
}

#[test]
fn test_seedable_construction() {
    let mut a = Mt19937::seed_from_u64(5489);
    let mut b = Mt19937::from_seed(5489_u32.to_le_bytes());
    assert_eq!(a.next_u32(), b.next_u32());

    let mut bytes = [0_u8; 7];
    Lcg::seed_from_u64(3).fill_bytes(&mut bytes);
    assert_ne!(bytes, [0; 7]);
}

#[test]
fn test_standard_normal_moments() {
    let mut twister = Mt19937::new(1);
    let samples: Vec<f32> = (0..20_000).map(|_| StandardNormal.sample(&mut twister)).collect();
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / samples.len() as f32;
    assert!(mean.abs() < 0.05, "mean {mean} should be close to 0");
    assert!((variance - 1.0).abs() < 0.05, "variance {variance} should be close to 1");
    assert!(samples.iter().all(|x| x.is_finite()));
}

#[test]
fn test_random_numbers_layout() {
    let mut out = Transcript::new();
    random_numbers(&mut Lcg::new(99), &mut out).unwrap();
    let rows: Vec<&str> = out.words().collect();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].len(), 10);
    assert!(rows[0].chars().all(|c| c == '0' || c == '1'));
    assert_eq!(rows[3].split_terminator(',').count(), 10);
}

#[test]
fn test_normal_samples_layout() {
    let mut out = Transcript::new();
    normal_samples(&mut Mt19937::default(), &mut out).unwrap();
    let text = out.as_str();
    assert!(text.starts_with("Mersenne twister: "));
    assert_eq!(text.matches(',').count(), 9);
}
