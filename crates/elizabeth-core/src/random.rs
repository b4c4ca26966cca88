use std::fmt::Display;

use rand::distr::uniform::SampleUniform;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};

pub const ASCII_UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
pub const ASCII_LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Seeded random source shared by every provider.
///
/// Wraps a ChaCha8 stream so that a fixed seed reproduces the exact same
/// sequence of values across platforms.
#[derive(Debug, Clone)]
pub struct Random {
    rng: ChaCha8Rng,
}

impl Random {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Split off an independent stream seeded from this one.
    pub fn derive(&mut self) -> Self {
        Self::from_seed(self.rng.next_u64())
    }

    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Pick one entry of a static string table, or `""` if the table is empty.
    pub fn pick(&mut self, items: &[&'static str]) -> &'static str {
        self.choice(items).copied().unwrap_or_default()
    }

    /// Draw `count` entries with replacement.
    pub fn sample_n<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        if items.is_empty() {
            return Vec::new();
        }
        (0..count)
            .filter_map(|_| self.choice(items).cloned())
            .collect()
    }

    /// Draw up to `count` distinct entries (without replacement).
    pub fn distinct<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        items
            .choose_multiple(&mut self.rng, count)
            .cloned()
            .collect()
    }

    /// Uniform value in the inclusive range; bounds may come in either order.
    pub fn between<T>(&mut self, low: T, high: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        if low > high {
            self.rng.random_range(high..=low)
        } else {
            self.rng.random_range(low..=high)
        }
    }

    /// Uniform float in `[low, high]` rounded to `precision` decimal places.
    ///
    /// Non-finite bounds, or a span that overflows `f64`, collapse to the lower
    /// finite bound, or `0.0` when neither is finite.
    pub fn uniform(&mut self, low: f64, high: f64, precision: u32) -> f64 {
        if !is_sampleable(low, high) {
            return [low, high]
                .into_iter()
                .filter(|bound| bound.is_finite())
                .reduce(f64::min)
                .unwrap_or(0.0);
        }
        let value = if low == high {
            low
        } else {
            self.between(low, high)
        };
        let factor = 10_f64.powi(precision as i32);
        ((value * factor).round() / factor).clamp(low.min(high), low.max(high))
    }

    pub fn bool(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    pub fn digit(&mut self) -> char {
        self.choice(DIGITS).copied().unwrap_or('0')
    }

    pub fn uppercase(&mut self) -> char {
        self.choice(ASCII_UPPERCASE).copied().unwrap_or('A')
    }

    /// Digits-only string of the given length (may start with zero).
    pub fn digits(&mut self, length: usize) -> String {
        (0..length).map(|_| self.digit()).collect()
    }
}

impl RngCore for Random {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}

/// Reject inverted `[min, max]` pairs passed in by callers.
pub fn ensure_range<T: PartialOrd + Display>(min: T, max: T, what: &str) -> Result<()> {
    if min > max {
        return Err(Error::InvalidInput(format!(
            "{what}: minimum {min} must be <= maximum {max}"
        )));
    }
    Ok(())
}

/// Reject float ranges that cannot be sampled: inverted pairs, NaN or
/// infinite bounds, and spans that overflow `f64`.
pub fn ensure_float_range(min: f64, max: f64, what: &str) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::InvalidInput(format!(
            "{what}: bounds must be finite, got {min} and {max}"
        )));
    }
    ensure_range(min, max, what)?;
    if !(max - min).is_finite() {
        return Err(Error::InvalidInput(format!(
            "{what}: range {min}..{max} is too wide"
        )));
    }
    Ok(())
}

fn is_sampleable(low: f64, high: f64) -> bool {
    low.is_finite() && high.is_finite() && (high - low).abs().is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Random::from_seed(7);
        let mut b = Random::from_seed(7);
        let left: Vec<u32> = (0..16).map(|_| a.between(0, 1000)).collect();
        let right: Vec<u32> = (0..16).map(|_| b.between(0, 1000)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn between_accepts_inverted_bounds() {
        let mut rng = Random::from_seed(1);
        for _ in 0..100 {
            let value = rng.between(10, 1);
            assert!((1..=10).contains(&value));
        }
    }

    #[test]
    fn uniform_rounds_and_stays_in_range() {
        let mut rng = Random::from_seed(3);
        for _ in 0..200 {
            let value = rng.uniform(1.5, 2.0, 2);
            assert!((1.5..=2.0).contains(&value));
            let scaled = value * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
        assert_eq!(rng.uniform(4.0, 4.0, 1), 4.0);
    }

    #[test]
    fn pick_on_empty_table_is_empty_string() {
        let mut rng = Random::from_seed(1);
        assert_eq!(rng.pick(&[]), "");
        assert!(rng.sample_n::<u8>(&[], 3).is_empty());
    }

    #[test]
    fn distinct_never_repeats() {
        let mut rng = Random::from_seed(11);
        let mut values = rng.distinct(DIGITS, 6);
        assert_eq!(values.len(), 6);
        values.sort();
        values.dedup();
        assert_eq!(values.len(), 6);
        assert_eq!(rng.distinct(DIGITS, 20).len(), DIGITS.len());
    }

    #[test]
    fn derived_streams_differ_from_parent() {
        let mut parent = Random::from_seed(5);
        let mut child = parent.derive();
        assert_ne!(parent.next_u64(), child.next_u64());
    }

    #[test]
    fn ensure_range_rejects_inverted_pairs() {
        assert!(ensure_range(1, 2, "age").is_ok());
        assert!(ensure_range(2, 2, "age").is_ok());
        let err = ensure_range(5, 2, "age").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn ensure_float_range_rejects_unsampleable_bounds() {
        assert!(ensure_float_range(1.5, 2.0, "height").is_ok());
        assert!(ensure_float_range(-f64::MAX / 2.0, f64::MAX / 2.0, "price").is_ok());
        for (min, max) in [
            (2.0, 1.0),
            (f64::NAN, 2.0),
            (0.0, f64::NAN),
            (0.0, f64::INFINITY),
            (f64::NEG_INFINITY, 0.0),
            (-f64::MAX, f64::MAX),
        ] {
            let err = ensure_float_range(min, max, "price").unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{min}..{max}");
        }
    }

    #[test]
    fn uniform_never_panics_on_bad_bounds() {
        let mut rng = Random::from_seed(9);
        assert_eq!(rng.uniform(f64::NAN, 2.0, 2), 2.0);
        assert_eq!(rng.uniform(0.0, f64::INFINITY, 2), 0.0);
        assert_eq!(rng.uniform(-f64::MAX, f64::MAX, 2), -f64::MAX);
        assert_eq!(rng.uniform(f64::NAN, f64::NAN, 2), 0.0);
    }
}
