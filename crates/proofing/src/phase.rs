//! Engine lifecycle phases.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Lifecycle phase of a proofing simulation.
///
/// The engine moves Idle → Running → Idle freely via start/pause, but
/// Collapsed is terminal: once the dough over-proofs, only a full reset
/// brings the engine back to Idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Phase {
    /// Not running; elapsed time may be nonzero if paused mid-run
    Idle,

    /// Ticks advance the simulation
    Running,

    /// Terminal over-proof state; running is disallowed until reset
    Collapsed,
}

impl Phase {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Collapsed => "Collapsed",
        }
    }

    /// Whether this phase permits no further progress without a reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Collapsed)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
