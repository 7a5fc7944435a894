//! WASM bindings for the dough fermentation simulator.
//!
//! This crate provides JavaScript/TypeScript bindings for the fermentation
//! model and the proofing engine using `wasm-bindgen` and
//! `serde-wasm-bindgen` for seamless type conversion.
//!
//! # Architecture
//!
//! Simulation state is stored in thread-local storage (WASM is
//! single-threaded). Functions return opaque IDs for referencing mutable
//! state, and serializable snapshots for reading state.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! import init, {
//!     neapolitan_recipe,
//!     sim_create,
//!     sim_start,
//!     sim_step,
//!     step_interval_ms,
//! } from 'cornicione-wasm';
//!
//! await init();
//!
//! const recipe = neapolitan_recipe();
//! const simId = sim_create(recipe);
//! sim_start(simId);
//!
//! // Drive the engine on the canonical cadence
//! setInterval(() => {
//!     const state = sim_step(simId);
//!     render(state.volumeRatio, state.milestones);
//! }, step_interval_ms());
//! ```

use wasm_bindgen::prelude::*;

mod model;
mod sim;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// Type aliases for unit types (serialized as numbers via serde(transparent))
#[wasm_bindgen(typescript_custom_section)]
const TS_UNIT_TYPES: &'static str = r#"
/** Temperature in °C */
export type Temperature = number;
/** Time in minutes */
export type Time = number;
/** UUID string */
export type Uuid = string;
"#;
