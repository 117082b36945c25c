//! Seeded random source for puzzle generation.
//!
//! A [`PatternRng`] turns a user-supplied seed string and a creativity knob
//! into a reproducible stream of draws. Every helper is built on
//! [`PatternRng::next_float`], one float per random decision, so the number of
//! draws a generator consumes is predictable from its code.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Initial value of the djb2 string hash.
const DJB2_INIT: u32 = 5381;

/// A deterministic random source carrying a seed and a creativity value.
#[derive(Debug, Clone)]
pub struct PatternRng {
    seed: Option<String>,
    seed_int: u32,
    creativity: f64,
    draws: u64,
    inner: StdRng,
}

impl PatternRng {
    /// Create a random source from an optional seed string and creativity.
    ///
    /// An absent or blank seed draws a fresh 32-bit seed from OS entropy.
    /// A seed made only of decimal digits is used literally (mod 2^32); any
    /// other string is hashed. Creativity is clamped to `[0, 1]` and
    /// non-finite values become 0.
    pub fn new(seed_input: Option<&str>, creativity: f64) -> Self {
        let trimmed = seed_input.map(str::trim).filter(|s| !s.is_empty());
        let seed_int = match trimmed {
            None => rand::random::<u32>(),
            Some(s) => derive_seed(s),
        };
        Self::from_parts(trimmed.map(str::to_string), seed_int, creativity)
    }

    /// Create a random source from an already-derived integer seed.
    pub fn from_seed_int(seed_int: u32, creativity: f64) -> Self {
        Self::from_parts(Some(seed_int.to_string()), seed_int, creativity)
    }

    fn from_parts(seed: Option<String>, seed_int: u32, creativity: f64) -> Self {
        Self {
            seed,
            seed_int,
            creativity: clamp_creativity(creativity),
            draws: 0,
            inner: StdRng::seed_from_u64(u64::from(seed_int)),
        }
    }

    /// The seed as the caller supplied it, or `None` if it was generated.
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// The derived 32-bit seed.
    pub fn seed_int(&self) -> u32 {
        self.seed_int
    }

    /// The creativity value in `[0, 1]`.
    pub fn creativity(&self) -> f64 {
        self.creativity
    }

    /// Number of floats drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Next float in `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        self.draws += 1;
        self.inner.random::<f64>()
    }

    /// Uniform float in `[a, b)`.
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.next_float()
    }

    /// Integer in `[0, n)`. Returns 0 without drawing when `n` is 0.
    pub fn randrange(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        // The float is strictly below 1, but guard the product against rounding.
        ((self.next_float() * n as f64) as usize).min(n - 1)
    }

    /// A uniformly chosen element, or `None` for an empty slice.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.randrange(items.len());
        items.get(idx)
    }

    /// A coin flip with probability one half.
    pub fn coin(&mut self) -> bool {
        self.next_float() < 0.5
    }

    /// In-place Fisher-Yates shuffle walking from the back.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.randrange(i + 1);
            items.swap(i, j);
        }
    }

    /// Pick a value proportionally to its weight.
    ///
    /// When the total weight is not positive the first value is returned
    /// without drawing. An empty table yields `None`.
    pub fn weighted_choice<'a, T>(&mut self, pairs: &'a [(T, f64)]) -> Option<&'a T> {
        let (first, _) = pairs.first()?;
        let total: f64 = pairs.iter().map(|(_, w)| *w).sum();
        if total.is_nan() || total <= 0.0 {
            return Some(first);
        }
        let mut pick = self.next_float() * total;
        for (value, weight) in pairs {
            pick -= weight;
            if pick <= 0.0 {
                return Some(value);
            }
        }
        pairs.last().map(|(value, _)| value)
    }

    /// Signed noise in `(-scale, scale)` proportional to creativity.
    pub fn jitter(&mut self, scale: f64) -> f64 {
        (2.0 * self.next_float() - 1.0) * self.creativity * scale
    }
}

/// Create a random source; alias of [`PatternRng::new`].
pub fn create_random_source(seed_input: Option<&str>, creativity: f64) -> PatternRng {
    PatternRng::new(seed_input, creativity)
}

/// Derive the 32-bit seed for a non-empty seed string.
pub fn derive_seed(input: &str) -> u32 {
    if input.bytes().all(|b| b.is_ascii_digit()) {
        // Reduce digit by digit so long numbers wrap instead of overflowing.
        input.bytes().fold(0u32, |acc, b| {
            acc.wrapping_mul(10).wrapping_add(u32::from(b - b'0'))
        })
    } else {
        djb2(input)
    }
}

/// The djb2 hash over UTF-16 code units, wrapping at 32 bits.
pub fn djb2(input: &str) -> u32 {
    input.encode_utf16().fold(DJB2_INIT, |h, unit| {
        (h << 5).wrapping_add(h).wrapping_add(u32::from(unit))
    })
}

fn clamp_creativity(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seeded(seed: &str) -> PatternRng {
        PatternRng::new(Some(seed), 0.5)
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seeded("hello");
        let mut b = seeded("hello");
        for _ in 0..100 {
            assert_eq!(a.next_float().to_bits(), b.next_float().to_bits());
        }
    }

    #[test]
    fn numeric_seed_is_literal() {
        assert_eq!(seeded("42").seed_int(), 42);
        assert_eq!(seeded("0").seed_int(), 0);
        assert_eq!(seeded("4294967296").seed_int(), 0);
        assert_eq!(seeded("4294967297").seed_int(), 1);
    }

    #[test]
    fn text_seed_is_hashed() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 5381 * 33 + 97);
        assert_eq!(seeded("forty-two").seed_int(), djb2("forty-two"));
    }

    #[test]
    fn numeric_and_text_seeds_differ() {
        let mut a = seeded("42");
        let mut b = seeded("forty-two");
        assert_ne!(a.seed_int(), b.seed_int());
        let xs: Vec<u64> = (0..8).map(|_| a.next_float().to_bits()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_float().to_bits()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn seed_repr_is_kept() {
        assert_eq!(seeded("  spiral ").seed(), Some("spiral"));
        assert_eq!(PatternRng::new(None, 0.0).seed(), None);
        assert_eq!(PatternRng::new(Some("   "), 0.0).seed(), None);
        assert_eq!(PatternRng::from_seed_int(7, 0.0).seed(), Some("7"));
    }

    #[test]
    fn creativity_clamped() {
        assert_eq!(PatternRng::new(Some("1"), -5.0).creativity(), 0.0);
        assert_eq!(PatternRng::new(Some("1"), 99.0).creativity(), 1.0);
        assert_eq!(PatternRng::new(Some("1"), f64::NAN).creativity(), 0.0);
        assert_eq!(PatternRng::new(Some("1"), f64::INFINITY).creativity(), 0.0);
        assert_eq!(PatternRng::new(Some("1"), 0.25).creativity(), 0.25);
    }

    #[test]
    fn randrange_zero_draws_nothing() {
        let mut rng = seeded("x");
        assert_eq!(rng.randrange(0), 0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn choice_on_empty_is_none() {
        let mut rng = seeded("x");
        let empty: [u8; 0] = [];
        assert!(rng.choice(&empty).is_none());
    }

    #[test]
    fn weighted_choice_fallbacks() {
        let mut rng = seeded("x");
        let empty: [(&str, f64); 0] = [];
        assert!(rng.weighted_choice(&empty).is_none());

        let zero = [("a", 0.0), ("b", 0.0)];
        assert_eq!(rng.weighted_choice(&zero), Some(&"a"));
        assert_eq!(rng.draws(), 0);

        let only_b = [("a", 0.0), ("b", 1.0)];
        for _ in 0..50 {
            assert_eq!(rng.weighted_choice(&only_b), Some(&"b"));
        }
    }

    #[test]
    fn weighted_choice_follows_weights() {
        let mut rng = seeded("weights");
        let table = [("rare", 1.0), ("common", 9.0)];
        let common = (0..2000)
            .filter(|_| rng.weighted_choice(&table) == Some(&"common"))
            .count();
        assert!(common > 1600 && common < 1990, "common drawn {common} times");
    }

    #[test]
    fn jitter_scales_with_creativity() {
        let mut calm = PatternRng::new(Some("j"), 0.0);
        for _ in 0..20 {
            assert_eq!(calm.jitter(10.0), 0.0);
        }
        let mut wild = PatternRng::new(Some("j"), 1.0);
        let spread: f64 = (0..200).map(|_| wild.jitter(10.0).abs()).fold(0.0, f64::max);
        assert!(spread > 5.0 && spread < 10.0);
    }

    #[test]
    fn draws_are_counted() {
        let mut rng = seeded("count");
        rng.next_float();
        rng.uniform(1.0, 2.0);
        rng.jitter(1.0);
        let mut v = [1, 2, 3, 4];
        rng.shuffle(&mut v);
        assert_eq!(rng.draws(), 6);
    }

    proptest! {
        #[test]
        fn next_float_in_unit_interval(seed in any::<u32>()) {
            let mut rng = PatternRng::from_seed_int(seed, 0.0);
            for _ in 0..32 {
                let x = rng.next_float();
                prop_assert!((0.0..1.0).contains(&x));
            }
        }

        #[test]
        fn randrange_in_bounds(seed in any::<u32>(), n in 1usize..500) {
            let mut rng = PatternRng::from_seed_int(seed, 0.0);
            for _ in 0..16 {
                prop_assert!(rng.randrange(n) < n);
            }
        }

        #[test]
        fn shuffle_is_permutation(seed in any::<u32>(), len in 0usize..40) {
            let mut rng = PatternRng::from_seed_int(seed, 0.0);
            let mut items: Vec<usize> = (0..len).collect();
            rng.shuffle(&mut items);
            items.sort_unstable();
            prop_assert_eq!(items, (0..len).collect::<Vec<_>>());
        }

        #[test]
        fn creativity_always_in_range(c in any::<f64>()) {
            let rng = PatternRng::from_seed_int(1, c);
            prop_assert!((0.0..=1.0).contains(&rng.creativity()));
        }

        #[test]
        fn uniform_in_range(seed in any::<u32>(), a in -100.0f64..100.0, w in 0.001f64..50.0) {
            let mut rng = PatternRng::from_seed_int(seed, 0.0);
            let x = rng.uniform(a, a + w);
            prop_assert!(x >= a && x <= a + w);
        }
    }
}
