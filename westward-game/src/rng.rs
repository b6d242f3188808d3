//! Random number seam for the simulation.
//!
//! Every nondeterministic draw in the core goes through [`TrailRng`]. Any
//! `rand::Rng` satisfies it, so sessions run on a seeded `ChaCha20Rng` while
//! tests can replay exact draws with [`ScriptedRng`].

use rand::Rng;
use std::collections::VecDeque;

use crate::numbers::{floor_f64_to_u32, floor_f64_to_usize, usize_to_f64};

/// Draws consumed by the trail rules.
pub trait TrailRng {
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `low..=high`. Returns `low` when the range is empty.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> TrailRng for R {
    fn unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// Replays a fixed sequence of unit draws.
///
/// Integer and index draws are derived from the next unit value the same way
/// a `floor(u * span)` roll would be, so a single script drives every kind of
/// draw. Once the script is exhausted the fallback value is returned forever.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: VecDeque<f64>,
    fallback: f64,
    draws: u64,
}

impl ScriptedRng {
    /// Fallback draw that never triggers an event or a hunting injury.
    pub const QUIET: f64 = 0.999;

    #[must_use]
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            script: script.into_iter().collect(),
            fallback: Self::QUIET,
            draws: 0,
        }
    }

    /// Replace the value returned after the script runs out.
    #[must_use]
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = sanitize_unit(fallback);
        self
    }

    /// Append further draws to the end of the script.
    pub fn push(&mut self, value: f64) {
        self.script.push_back(value);
    }

    /// Number of draws served so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Number of scripted draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl TrailRng for ScriptedRng {
    fn unit(&mut self) -> f64 {
        self.draws = self.draws.saturating_add(1);
        let next = self.script.pop_front().unwrap_or(self.fallback);
        sanitize_unit(next)
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = f64::from(high - low) + 1.0;
        let offset = floor_f64_to_u32(self.unit() * span).min(high - low);
        low + offset
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        floor_f64_to_usize(self.unit() * usize_to_f64(len)).min(len - 1)
    }
}

fn sanitize_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0 - f64::EPSILON)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn scripted_rng_replays_then_falls_back() {
        let mut rng = ScriptedRng::new([0.1, 0.5]);
        assert!((rng.unit() - 0.1).abs() < f64::EPSILON);
        assert!((rng.unit() - 0.5).abs() < f64::EPSILON);
        assert!((rng.unit() - ScriptedRng::QUIET).abs() < f64::EPSILON);
        assert_eq!(rng.draws(), 3);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn scripted_integer_draws_floor_the_unit_value() {
        let mut rng = ScriptedRng::new([0.0, 0.3366, 0.999_999, 0.5]);
        assert_eq!(rng.int_inclusive(50, 199), 50);
        assert_eq!(rng.int_inclusive(50, 199), 100);
        assert_eq!(rng.int_inclusive(50, 199), 199);
        assert_eq!(rng.index(4), 2);
        assert_eq!(rng.index(0), 0);
    }

    #[test]
    fn scripted_values_are_clamped_into_unit_range() {
        let mut rng = ScriptedRng::new([-1.0, 7.0, f64::NAN]).with_fallback(2.0);
        assert!(rng.unit().abs() < f64::EPSILON);
        assert!(rng.unit() < 1.0);
        assert!(rng.unit().abs() < f64::EPSILON);
        assert!(rng.unit() < 1.0);
    }

    #[test]
    fn seeded_rngs_stay_in_range_and_repeat() {
        let mut a = ChaCha20Rng::seed_from_u64(7);
        let mut b = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..200 {
            let u = a.unit();
            assert!((0.0..1.0).contains(&u));
            assert!((u - b.unit()).abs() < f64::EPSILON);
            let roll = a.int_inclusive(50, 199);
            assert!((50..=199).contains(&roll));
            assert_eq!(roll, b.int_inclusive(50, 199));
            assert!(a.index(3) < 3);
            let _ = b.index(3);
        }
        assert_eq!(a.int_inclusive(9, 9), 9);
        assert_eq!(a.index(0), 0);
    }
}
