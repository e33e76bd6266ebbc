//! Headless mode for scripted battles
//!
//! Runs a single battle from a JSON description without any prompts, suitable
//! for automated testing and reproducible replays.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- --config battle.json
//! ```
//!
//! ## JSON Configuration
//!
//! ```json
//! {
//!   "challenger": { "kind": "paladin", "name": "Arthur" },
//!   "defender": { "kind": "assassin", "name": "Altair" },
//!   "max_turns": 10,
//!   "random_seed": 42
//! }
//! ```

pub mod config;
pub mod runner;

pub use config::HeadlessBattleConfig;
pub use runner::{run_headless_battle, BattleResult};
