//! Deterministic dice for drivers.
//!
//! The engine never rolls dice itself - `move_player` takes the step count
//! as input, so every turn is replayable from a transcript. Drivers that
//! want randomness use `DiceRng`: the same seed always produces the same
//! sequence of rolls.
//!
//! ```
//! use realty_engine::DiceRng;
//!
//! let mut a = DiceRng::new(42);
//! let mut b = DiceRng::new(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded six-sided die.
///
/// Uses ChaCha8 for speed while staying fully deterministic per seed.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Roll the die: uniform in 1..=6.
    pub fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=6u8)
    }

    /// The seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_stay_in_die_range() {
        let mut dice = DiceRng::new(7);
        for _ in 0..1000 {
            let roll = dice.roll();
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = DiceRng::new(123);
        let mut b = DiceRng::new(123);
        let rolls_a: Vec<u8> = (0..20).map(|_| a.roll()).collect();
        let rolls_b: Vec<u8> = (0..20).map(|_| b.roll()).collect();
        assert_eq!(rolls_a, rolls_b);
    }
}
