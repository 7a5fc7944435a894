//! WASM bindings for the proofing engine.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use fermentation::Recipe;
use proofing::{Milestone, Phase, ProofingSim, SpeedLadder, STEP_INTERVAL_MS};
use units::Time;

use crate::{from_js, to_js};

// =============================================================================
// Thread-local storage for simulation state
// =============================================================================

/// Internal simulation entry: the engine plus its host-side speed control.
struct SimEntry {
    sim: ProofingSim,
    speed: SpeedLadder,
}

thread_local! {
    static SIMULATIONS: RefCell<HashMap<u32, SimEntry>> = RefCell::new(HashMap::new());
    static NEXT_SIM_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn with_entry<T>(
    sim_id: u32,
    f: impl FnOnce(&mut SimEntry) -> Result<T, JsError>,
) -> Result<T, JsError> {
    SIMULATIONS.with(|sims| {
        let mut sims = sims.borrow_mut();
        let entry = sims
            .get_mut(&sim_id)
            .ok_or_else(|| JsError::new(&format!("Simulation {} not found", sim_id)))?;
        f(entry)
    })
}

fn insert_entry(entry: SimEntry) -> u32 {
    let id = NEXT_SIM_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SIMULATIONS.with(|sims| {
        sims.borrow_mut().insert(id, entry);
    });

    id
}

// =============================================================================
// Serializable types for JavaScript interop
// =============================================================================

/// Complete simulation state snapshot
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimSnapshot {
    /// Elapsed simulated time in minutes
    pub elapsed_minutes: f64,
    /// Current volume relative to initial volume
    pub volume_ratio: f64,
    /// Whether the dough has over-proofed
    pub collapsed: bool,
    /// Lifecycle phase ("Idle", "Running", "Collapsed")
    pub phase: Phase,
    /// The doubling time driving the run, in minutes (may be Infinity)
    pub doubling_time_minutes: f64,
    /// Current speed multiplier
    pub speed_multiplier: u32,
    /// Whether the speed control is at its slowest rung
    pub is_min_speed: bool,
    /// Whether the speed control is at its fastest rung
    pub is_max_speed: bool,
    /// Milestones recorded this run, in crossing order
    pub milestones: Vec<Milestone>,
}

impl SimSnapshot {
    fn of(entry: &SimEntry) -> Self {
        Self {
            elapsed_minutes: entry.sim.elapsed().to_minutes(),
            volume_ratio: entry.sim.volume_ratio(),
            collapsed: entry.sim.is_collapsed(),
            phase: entry.sim.phase(),
            doubling_time_minutes: entry.sim.doubling_time().to_minutes(),
            speed_multiplier: entry.speed.multiplier(),
            is_min_speed: entry.speed.is_min(),
            is_max_speed: entry.speed.is_max(),
            milestones: entry.sim.milestones().entries().to_vec(),
        }
    }
}

// =============================================================================
// Simulation management
// =============================================================================

/// Create a proofing simulation for a recipe.
///
/// Returns a simulation ID for use with the other `sim_*` functions.
///
/// # Arguments
/// * `recipe` - A Recipe object (idy, salt, hydration, temperature)
#[wasm_bindgen]
pub fn sim_create(recipe: JsValue) -> Result<u32, JsError> {
    let recipe: Recipe = from_js(recipe)?;
    Ok(insert_entry(SimEntry {
        sim: ProofingSim::for_recipe(&recipe),
        speed: SpeedLadder::new(),
    }))
}

/// Create a proofing simulation driven by an explicit doubling-time target.
///
/// The target takes precedence over the recipe-derived doubling time until
/// cleared with `sim_clear_target`.
///
/// # Arguments
/// * `recipe` - A Recipe object
/// * `target_minutes` - Target doubling time in minutes
#[wasm_bindgen]
pub fn sim_create_with_target(recipe: JsValue, target_minutes: f64) -> Result<u32, JsError> {
    let recipe: Recipe = from_js(recipe)?;
    let mut sim = ProofingSim::for_recipe(&recipe);
    sim.set_target(Time::from_minutes(target_minutes));

    Ok(insert_entry(SimEntry {
        sim,
        speed: SpeedLadder::new(),
    }))
}

/// Delete a simulation to free memory.
#[wasm_bindgen]
pub fn sim_delete(sim_id: u32) {
    SIMULATIONS.with(|sims| {
        sims.borrow_mut().remove(&sim_id);
    });
}

// =============================================================================
// Run control
// =============================================================================

/// Start (or resume) the run.
///
/// # Returns
/// true when the engine is now running; false when starting was refused
/// (collapsed dough, or an unbounded doubling time).
#[wasm_bindgen]
pub fn sim_start(sim_id: u32) -> Result<bool, JsError> {
    with_entry(sim_id, |entry| Ok(entry.sim.start()))
}

/// Pause the run, keeping elapsed time and milestones.
#[wasm_bindgen]
pub fn sim_pause(sim_id: u32) -> Result<(), JsError> {
    with_entry(sim_id, |entry| {
        entry.sim.pause();
        Ok(())
    })
}

/// Reset the run to a fresh idle state.
///
/// Clears elapsed time, volume, milestones and any doubling-time target,
/// and returns the speed control to 1x — the reset-button semantics of a
/// control surface.
#[wasm_bindgen]
pub fn sim_reset(sim_id: u32) -> Result<(), JsError> {
    with_entry(sim_id, |entry| {
        entry.sim.reset();
        entry.sim.clear_target();
        entry.speed.reset();
        Ok(())
    })
}

/// Set an explicit doubling-time target. Ignored while running.
///
/// # Arguments
/// * `sim_id` - Simulation ID
/// * `target_minutes` - Target doubling time in minutes
#[wasm_bindgen]
pub fn sim_set_target(sim_id: u32, target_minutes: f64) -> Result<(), JsError> {
    with_entry(sim_id, |entry| {
        entry.sim.set_target(Time::from_minutes(target_minutes));
        Ok(())
    })
}

/// Drop the doubling-time target and fall back to the recipe-derived value.
#[wasm_bindgen]
pub fn sim_clear_target(sim_id: u32) -> Result<(), JsError> {
    with_entry(sim_id, |entry| {
        entry.sim.clear_target();
        Ok(())
    })
}

/// Re-derive the doubling time from changed recipe parameters.
///
/// Only applies while idle; the engine ignores recipe changes mid-run.
///
/// # Arguments
/// * `sim_id` - Simulation ID
/// * `recipe` - The updated Recipe object
#[wasm_bindgen]
pub fn sim_update_recipe(sim_id: u32, recipe: JsValue) -> Result<(), JsError> {
    let recipe: Recipe = from_js(recipe)?;
    with_entry(sim_id, |entry| {
        entry.sim.update_recipe(&recipe);
        Ok(())
    })
}

// =============================================================================
// Speed control
// =============================================================================

/// Move the speed control one rung faster.
///
/// # Returns
/// The new speed multiplier.
#[wasm_bindgen]
pub fn sim_speed_up(sim_id: u32) -> Result<u32, JsError> {
    with_entry(sim_id, |entry| {
        entry.speed.speed_up();
        Ok(entry.speed.multiplier())
    })
}

/// Move the speed control one rung slower.
///
/// # Returns
/// The new speed multiplier.
#[wasm_bindgen]
pub fn sim_slow_down(sim_id: u32) -> Result<u32, JsError> {
    with_entry(sim_id, |entry| {
        entry.speed.slow_down();
        Ok(entry.speed.multiplier())
    })
}

// =============================================================================
// Stepping and state queries
// =============================================================================

/// Advance the simulation by one base step at the current speed.
///
/// Intended to be called once per fixed real-time period (see
/// `step_interval_ms`). Harmless while idle or collapsed: the engine
/// ignores ticks outside the running phase, so the host timer may keep
/// firing across pauses.
///
/// # Returns
/// A snapshot of the state after the step.
#[wasm_bindgen]
pub fn sim_step(sim_id: u32) -> Result<JsValue, JsError> {
    with_entry(sim_id, |entry| {
        proofing::step(&mut entry.sim, &entry.speed);
        to_js(&SimSnapshot::of(entry))
    })
}

/// Get a snapshot of the current simulation state without advancing it.
#[wasm_bindgen]
pub fn sim_snapshot(sim_id: u32) -> Result<JsValue, JsError> {
    with_entry(sim_id, |entry| to_js(&SimSnapshot::of(entry)))
}

/// The canonical real-time period between steps, in milliseconds.
#[wasm_bindgen]
pub fn step_interval_ms() -> u32 {
    STEP_INTERVAL_MS as u32
}
