use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the randomness used by bot policies. Tests substitute forced
/// implementations to pin down which branch a policy takes.
pub trait RandomSource {
    /// Returns `true` with the given probability in `[0, 1]`.
    fn chance(&mut self, probability: f64) -> bool;

    /// Returns an index drawn uniformly from `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        for len in 1..20 {
            assert_eq!(a.pick_index(len), b.pick_index(len));
            assert_eq!(a.chance(0.5), b.chance(0.5));
        }
    }

    #[test]
    fn test_pick_index_stays_in_range() {
        let mut rng = SessionRng::new(7);
        for _ in 0..1000 {
            assert!(rng.pick_index(3) < 3);
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SessionRng::from_random();
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(SessionRng::new(1234).seed(), 1234);
    }
}
