//! Dough proofing simulation engine.
//!
//! This crate turns the fermentation model into a time-stepped simulation:
//! starting from a recipe's doubling time, it advances simulated minutes,
//! derives the current volume ratio, records milestone crossings and detects
//! the terminal over-proof collapse.
//!
//! # Architecture
//!
//! The engine is an explicit state machine ([`ProofingSim`]) with a
//! synchronous `tick(delta)` method. It owns nothing but its own state and
//! is scheduler-agnostic: any fixed-period timer — browser interval, game
//! loop, async task — that calls `tick` with the simulated minutes per
//! period satisfies the contract. The [`schedule`] module holds the cadence
//! constants and the speed ladder the presentation layer steps through.
//!
//! # Tick Sequence
//!
//! Each tick proceeds in this order:
//! 1. Advance elapsed simulated time
//! 2. Recompute volume ratio = 2^(elapsed / doubling time)
//! 3. Evaluate collapse (volume amplitude or time backstop)
//! 4. On collapse: record the Collapsed milestone, latch the terminal phase
//! 5. Otherwise: record Doubled / Tripled crossings not yet seen
//!
//! Collapse is checked before milestones, so a coarse tick that overshoots
//! straight past 2x and 3x into collapse records only the collapse.

pub mod driver;
pub mod milestone;
pub mod phase;
pub mod schedule;
pub mod sim;

// Re-export key types at crate root
pub use driver::{run_until_finished, step};
pub use milestone::{Milestone, MilestoneLabel, MilestoneLog};
pub use phase::Phase;
pub use schedule::{SpeedLadder, BASE_MINUTES_PER_STEP, STEP_INTERVAL_MS};
pub use sim::{CollapseRule, ProofingSim};
