//! Neapolitan pizza-dough fermentation model.
//!
//! This crate provides the deterministic core of the dough simulator: a
//! recipe parameter type, the doubling-time formula mapping a recipe to the
//! time its dough takes to double in volume, the algebraic inverse solving
//! for the yeast percentage that hits a target doubling time, and mass
//! scaling from baker's percentages to gram weights.

pub mod constants;
pub mod doubling;
pub mod recipe;
pub mod scaling;

// Re-export key types at crate root
pub use doubling::{doubling_time, required_idy};
pub use recipe::Recipe;
pub use scaling::RecipeWeights;

#[cfg(test)]
mod doubling_test;
