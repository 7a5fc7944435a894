//! Recipe parameters expressed as baker's percentages.

use serde::{Deserialize, Serialize};
use units::Temperature;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Dough recipe parameters.
///
/// All mass quantities are baker's percentages: mass relative to flour mass,
/// times 100. A 63 % hydration dough made with 1 kg of flour holds 630 g of
/// water.
///
/// # Fields
/// * `idy` - Instant dry yeast (% of flour mass)
/// * `salt` - Salt (% of flour mass)
/// * `hydration` - Water (% of flour mass)
/// * `temperature` - Fermentation temperature
///
/// # Examples
/// ```
/// use fermentation::Recipe;
///
/// let recipe = Recipe::neapolitan();
/// assert!(recipe.is_viable());
/// assert_eq!(recipe.hydration, 63.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Recipe {
    /// Instant dry yeast as a percentage of flour mass
    pub idy: f64,
    /// Salt as a percentage of flour mass
    pub salt: f64,
    /// Water as a percentage of flour mass
    pub hydration: f64,
    /// Fermentation temperature
    pub temperature: Temperature,
}

impl Recipe {
    /// Create a recipe from explicit percentages and a temperature.
    pub fn new(idy: f64, salt: f64, hydration: f64, temperature: Temperature) -> Self {
        Self {
            idy,
            salt,
            hydration,
            temperature,
        }
    }

    /// The canonical Neapolitan recipe: 0.5 % IDY, 2.8 % salt, 63 %
    /// hydration, fermented at 24 °C.
    pub fn neapolitan() -> Self {
        Self::new(0.5, 2.8, 63.0, Temperature::from_celsius(24.0))
    }

    /// Whether this recipe can proof at all.
    ///
    /// Dough with no yeast or no water never doubles; its doubling time is
    /// unbounded and a simulation of it never progresses.
    pub fn is_viable(&self) -> bool {
        self.idy > 0.0 && self.hydration > 0.0
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::neapolitan()
    }
}
