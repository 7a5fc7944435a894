//! Recipe mass scaling from baker's percentages to gram weights.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::recipe::Recipe;

/// Ingredient weights for a batch of dough.
///
/// Derived from a [`Recipe`] and a flour amount: every other ingredient is
/// its baker's percentage applied to the flour mass.
///
/// # Examples
/// ```
/// use fermentation::{Recipe, RecipeWeights};
///
/// let weights = RecipeWeights::for_flour(&Recipe::neapolitan(), 1_000.0);
/// assert_eq!(weights.water_grams, 630.0);
/// assert_eq!(weights.salt_grams, 28.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct RecipeWeights {
    /// Flour mass in grams
    pub flour_grams: f64,
    /// Water mass in grams
    pub water_grams: f64,
    /// Salt mass in grams
    pub salt_grams: f64,
    /// Instant dry yeast mass in grams
    pub idy_grams: f64,
}

impl RecipeWeights {
    /// Scale a recipe to a flour amount in grams.
    pub fn for_flour(recipe: &Recipe, flour_grams: f64) -> Self {
        Self {
            flour_grams,
            water_grams: flour_grams * recipe.hydration / 100.0,
            salt_grams: flour_grams * recipe.salt / 100.0,
            idy_grams: flour_grams * recipe.idy / 100.0,
        }
    }

    /// Scale a recipe to a flour amount in kilograms.
    pub fn for_flour_kg(recipe: &Recipe, flour_kg: f64) -> Self {
        Self::for_flour(recipe, flour_kg * 1_000.0)
    }

    /// Total dough mass in grams.
    pub fn total_grams(&self) -> f64 {
        self.flour_grams + self.water_grams + self.salt_grams + self.idy_grams
    }

    /// Number of dough balls this batch yields at a given ball weight.
    ///
    /// Returns 0 for a non-positive ball weight.
    pub fn ball_yield(&self, ball_grams: f64) -> f64 {
        if ball_grams <= 0.0 {
            return 0.0;
        }
        self.total_grams() / ball_grams
    }
}
