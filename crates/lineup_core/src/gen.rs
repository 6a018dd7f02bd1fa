//! Injected id/number/name generation.
//!
//! Everything random in the core goes through the [`Generator`] trait so
//! tests can supply deterministic sequences.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Name pool for generated players.
pub const MOCK_NAMES: [&str; 16] = [
    "Alexander",
    "Jordan",
    "Marcus",
    "Elena",
    "Lucas",
    "Sophie",
    "Ryan",
    "Maya",
    "Liam",
    "Noah",
    "Olivia",
    "James",
    "Benjamin",
    "Henry",
    "Theodore",
    "Jack",
];

/// Display name given to players added straight to the bench.
pub const PLACEHOLDER_NAME: &str = "New Prospect";

/// Position label for bench-only players.
pub const BENCH_POSITION: &str = "SUB";

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Source of generated ids, jersey numbers, and player names.
pub trait Generator {
    /// Fresh entity id, 9 lowercase base36 characters.
    fn next_id(&mut self) -> String;

    /// Jersey number as free text, "1"..="99".
    fn jersey_number(&mut self) -> String;

    /// A display name drawn from the mock-name pool.
    fn pick_name(&mut self) -> String;
}

/// Production generator backed by a seedable RNG.
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Reproducible generator for replays and debugging.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    fn next_id(&mut self) -> String {
        (0..ID_LEN)
            .map(|_| ID_ALPHABET[self.rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }

    fn jersey_number(&mut self) -> String {
        self.rng.gen_range(1..=99u32).to_string()
    }

    fn pick_name(&mut self) -> String {
        MOCK_NAMES[self.rng.gen_range(0..MOCK_NAMES.len())].to_string()
    }
}

/// Deterministic generator for tests: ids `p0, p1, ...`, numbers counting up
/// from 1, names cycling through the pool in order.
pub struct SequenceGenerator {
    ids: usize,
    numbers: u32,
    names: usize,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self { ids: 0, numbers: 0, names: 0 }
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SequenceGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("p{}", self.ids);
        self.ids += 1;
        id
    }

    fn jersey_number(&mut self) -> String {
        self.numbers += 1;
        self.numbers.to_string()
    }

    fn pick_name(&mut self) -> String {
        let name = MOCK_NAMES[self.names % MOCK_NAMES.len()].to_string();
        self.names += 1;
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_have_expected_shape() {
        let mut gen = RandomGenerator::seeded(7);
        for _ in 0..50 {
            let id = gen.next_id();
            assert_eq!(id.len(), ID_LEN);
            assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn random_jersey_numbers_in_range() {
        let mut gen = RandomGenerator::seeded(7);
        for _ in 0..200 {
            let n: u32 = gen.jersey_number().parse().unwrap();
            assert!((1..=99).contains(&n));
        }
    }

    #[test]
    fn seeded_generators_repeat() {
        let mut a = RandomGenerator::seeded(42);
        let mut b = RandomGenerator::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
            assert_eq!(a.jersey_number(), b.jersey_number());
            assert_eq!(a.pick_name(), b.pick_name());
        }
    }

    #[test]
    fn sequence_generator_is_predictable() {
        let mut gen = SequenceGenerator::new();
        assert_eq!(gen.next_id(), "p0");
        assert_eq!(gen.next_id(), "p1");
        assert_eq!(gen.jersey_number(), "1");
        assert_eq!(gen.jersey_number(), "2");
        assert_eq!(gen.pick_name(), MOCK_NAMES[0]);
        assert_eq!(gen.pick_name(), MOCK_NAMES[1]);
    }
}
