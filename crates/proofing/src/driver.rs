//! Driver helpers for hosts with a simple fixed-period loop.
//!
//! The engine itself is scheduler-agnostic; these helpers implement the one
//! policy most hosts want — advance one base step per period at the ladder's
//! current speed — so timer callbacks stay one-liners.

use units::Time;

use crate::schedule::SpeedLadder;
use crate::sim::ProofingSim;

/// Execute one scheduled step.
///
/// Advances the simulation by one base step at the ladder's current speed.
/// Ticks on a non-running simulation are ignored by the engine, so a host
/// may keep its timer firing across pauses.
///
/// # Returns
/// The simulated time span applied this step.
pub fn step(sim: &mut ProofingSim, speed: &SpeedLadder) -> Time {
    let delta = speed.step();
    sim.tick(delta);
    delta
}

/// Step until the run leaves the running phase, or a step budget runs out.
///
/// The budget guards callers against spinning forever on a configuration
/// that never collapses within the window they care about.
///
/// # Returns
/// Number of steps taken.
pub fn run_until_finished(sim: &mut ProofingSim, speed: &SpeedLadder, max_steps: usize) -> usize {
    let mut steps = 0;
    while sim.is_running() && steps < max_steps {
        step(sim, speed);
        steps += 1;
    }
    steps
}
