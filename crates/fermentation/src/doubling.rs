//! Doubling-time model and its inverse.
//!
//! The doubling time is the simulated time a dough takes to reach twice its
//! initial volume. It scales inversely with yeast percentage and hydration,
//! doubles for every 10 °C below the 30 °C reference (and halves for every
//! 10 °C above it), and grows linearly with salt.

use units::{Temperature, Time};

use crate::constants::{
    IDY_DECIMAL_DIGITS, RATE_DOUBLING_INTERVAL_C, REFERENCE_HYDRATION, REFERENCE_TEMPERATURE_C,
    SALT_RETARDATION, YEAST_ACTIVITY,
};
use crate::recipe::Recipe;

/// Combined environmental slowdown relative to the reference conditions.
///
/// Everything in the model except the yeast itself: the thermal factor, the
/// hydration factor and the salt factor. Shared by both directions of the
/// model so that [`doubling_time`] and [`required_idy`] stay exact algebraic
/// inverses.
fn environment_factor(salt: f64, hydration: f64, temperature: Temperature) -> f64 {
    let thermal = 2f64
        .powf((REFERENCE_TEMPERATURE_C - temperature.to_celsius()) / RATE_DOUBLING_INTERVAL_C);
    let wetness = REFERENCE_HYDRATION / hydration;
    let saltiness = 1.0 + SALT_RETARDATION * salt;

    thermal * wetness * saltiness
}

/// Time for the dough to double in volume under the given recipe.
///
/// Degenerate recipes (no yeast or no water) return [`Time::infinite`]:
/// the dough never proofs. This function never panics.
///
/// # Examples
/// ```
/// use fermentation::{doubling_time, Recipe};
/// use units::{Temperature, Time};
///
/// // 0.4 % IDY, no salt, 60 % hydration at the 30 °C reference doubles
/// // in exactly one hour.
/// let recipe = Recipe::new(0.4, 0.0, 60.0, Temperature::from_celsius(30.0));
/// assert_eq!(doubling_time(&recipe).to_minutes(), 60.0);
///
/// // Dropping 10 °C doubles the doubling time.
/// let colder = Recipe::new(0.4, 0.0, 60.0, Temperature::from_celsius(20.0));
/// assert_eq!(doubling_time(&colder).to_minutes(), 120.0);
/// ```
pub fn doubling_time(recipe: &Recipe) -> Time {
    if !recipe.is_viable() {
        return Time::infinite();
    }

    let hours = (YEAST_ACTIVITY / recipe.idy)
        * environment_factor(recipe.salt, recipe.hydration, recipe.temperature);

    Time::from_hours(hours)
}

/// Yeast percentage required to hit a target doubling time.
///
/// Exact algebraic inverse of [`doubling_time`] solved for `idy`, rounded to
/// four decimal digits so the noisy floating tail does not propagate into a
/// control surface. Non-positive targets and non-positive hydration return
/// 0: no amount of yeast satisfies the request, and the caller is expected
/// to reject the value before use.
///
/// # Examples
/// ```
/// use fermentation::required_idy;
/// use units::{Temperature, Time};
///
/// let idy = required_idy(
///     Time::from_hours(1.0),
///     0.0,
///     60.0,
///     Temperature::from_celsius(30.0),
/// );
/// assert_eq!(idy, 0.4);
/// ```
pub fn required_idy(target: Time, salt: f64, hydration: f64, temperature: Temperature) -> f64 {
    if target.to_minutes() <= 0.0 || hydration <= 0.0 {
        return 0.0;
    }

    let idy = YEAST_ACTIVITY * environment_factor(salt, hydration, temperature) / target.to_hours();

    round_to_digits(idy, IDY_DECIMAL_DIGITS)
}

/// Fixed-point rounding to a given number of decimal digits.
fn round_to_digits(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}
