//! Randomness for battle simulation
//!
//! Special actions never reach for a global RNG. They take a [`RollSource`],
//! so a seeded [`GameRng`] reproduces a battle exactly and tests can script
//! the rolls they need.

use rand::prelude::*;
use rand::rngs::StdRng;

/// Highest value a percent roll can produce (inclusive).
pub const ROLL_MAX: u32 = 100;

/// Source of percent rolls used by chance-based abilities.
pub trait RollSource {
    /// Uniform integer in `[0, 100]`.
    fn roll_percent(&mut self) -> u32;
}

/// Seeded random number generator for deterministic battles.
///
/// When a seed is provided (e.g., via headless config), the same seed will
/// always produce the same battle. Without a seed, uses system entropy.
pub struct GameRng {
    rng: StdRng,
    /// The seed used to initialize this RNG (if deterministic)
    pub seed: Option<u64>,
}

impl GameRng {
    /// Create a new GameRng with a specific seed for deterministic behavior
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a new GameRng with random entropy (non-deterministic)
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                tracing::info!("Using deterministic RNG with seed: {}", seed);
                Self::from_seed(seed)
            }
            None => {
                tracing::info!("Using non-deterministic RNG (no seed provided)");
                Self::from_entropy()
            }
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RollSource for GameRng {
    fn roll_percent(&mut self) -> u32 {
        self.rng.gen_range(0..=ROLL_MAX)
    }
}
