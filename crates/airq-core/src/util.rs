//! Utility functions for airq-core.
//!
//! Every simulated component takes its own random source. These helpers
//! build those sources from an optional seed so a whole fleet can be made
//! reproducible from one number.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Create the root random source.
///
/// With a seed the sequence is reproducible; without one it is seeded from
/// the operating system.
///
/// # Example
///
/// ```
/// use airq_core::util::seeded_rng;
/// use rand::Rng;
///
/// let a: u32 = seeded_rng(Some(7)).random();
/// let b: u32 = seeded_rng(Some(7)).random();
/// assert_eq!(a, b);
/// ```
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Derive an independent random source from `parent`.
pub fn fork_rng(parent: &mut impl RngCore) -> StdRng {
    StdRng::seed_from_u64(parent.next_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_reproducible() {
        let mut a = seeded_rng(Some(42));
        let mut b = seeded_rng(Some(42));
        for _ in 0..10 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_fork_rng_reproducible() {
        let mut parent_a = seeded_rng(Some(1));
        let mut parent_b = seeded_rng(Some(1));
        let mut child_a = fork_rng(&mut parent_a);
        let mut child_b = fork_rng(&mut parent_b);
        assert_eq!(child_a.random::<u32>(), child_b.random::<u32>());
    }

    #[test]
    fn test_forks_differ() {
        let mut parent = seeded_rng(Some(1));
        let mut first = fork_rng(&mut parent);
        let mut second = fork_rng(&mut parent);
        let a: Vec<u64> = (0..4).map(|_| first.random()).collect();
        let b: Vec<u64> = (0..4).map(|_| second.random()).collect();
        assert_ne!(a, b);
    }
}
