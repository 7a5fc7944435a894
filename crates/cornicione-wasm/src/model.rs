//! WASM bindings for the pure fermentation model.

use wasm_bindgen::prelude::*;

use fermentation::{doubling_time, required_idy, Recipe, RecipeWeights};
use units::{Temperature, Time};

use crate::{from_js, to_js};

/// The canonical Neapolitan recipe: 0.5 % IDY, 2.8 % salt, 63 % hydration
/// at 24 °C. A convenient starting point for a control surface.
#[wasm_bindgen]
pub fn neapolitan_recipe() -> Result<JsValue, JsError> {
    to_js(&Recipe::neapolitan())
}

/// Doubling time for a recipe, in minutes.
///
/// Returns `Infinity` for dough that can never proof (no yeast or no
/// water).
///
/// # Arguments
/// * `recipe` - A Recipe object (idy, salt, hydration, temperature)
#[wasm_bindgen]
pub fn doubling_time_minutes(recipe: JsValue) -> Result<f64, JsError> {
    let recipe: Recipe = from_js(recipe)?;
    Ok(doubling_time(&recipe).to_minutes())
}

/// Yeast percentage required to hit a target doubling time.
///
/// Returns 0 for non-positive targets or hydration; the caller is expected
/// to clamp the result to its input range before use.
///
/// # Arguments
/// * `target_minutes` - Desired doubling time in minutes
/// * `salt` - Salt percentage
/// * `hydration` - Hydration percentage
/// * `temperature_c` - Fermentation temperature in °C
#[wasm_bindgen]
pub fn required_idy_percent(
    target_minutes: f64,
    salt: f64,
    hydration: f64,
    temperature_c: f64,
) -> f64 {
    required_idy(
        Time::from_minutes(target_minutes),
        salt,
        hydration,
        Temperature::from_celsius(temperature_c),
    )
}

/// Ingredient weights for a batch, scaled from a flour amount in grams.
///
/// # Arguments
/// * `recipe` - A Recipe object
/// * `flour_grams` - Flour mass in grams
#[wasm_bindgen]
pub fn recipe_weights(recipe: JsValue, flour_grams: f64) -> Result<JsValue, JsError> {
    let recipe: Recipe = from_js(recipe)?;
    to_js(&RecipeWeights::for_flour(&recipe, flour_grams))
}

/// Number of dough balls a batch yields.
///
/// # Arguments
/// * `recipe` - A Recipe object
/// * `flour_grams` - Flour mass in grams
/// * `ball_grams` - Weight of one dough ball in grams
#[wasm_bindgen]
pub fn dough_ball_yield(recipe: JsValue, flour_grams: f64, ball_grams: f64) -> Result<f64, JsError> {
    let recipe: Recipe = from_js(recipe)?;
    Ok(RecipeWeights::for_flour(&recipe, flour_grams).ball_yield(ball_grams))
}
