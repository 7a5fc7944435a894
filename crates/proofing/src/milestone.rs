//! Milestone ledger for a proofing run.
//!
//! A run records at most one milestone per label. The ledger guarantees
//! that structurally with a keyed label set beside the insertion-ordered
//! entry list, so callers can re-evaluate thresholds every tick without
//! duplicate bookkeeping.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use units::Time;
use uuid::Uuid;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// The milestone kinds a run can hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum MilestoneLabel {
    /// Volume reached 2x the initial volume
    Doubled,

    /// Volume reached 3x the initial volume
    Tripled,

    /// The dough over-proofed and its structure failed
    Collapsed,
}

impl MilestoneLabel {
    /// Volume ratio at which this milestone is crossed, for the labels
    /// driven by a volume threshold. Collapse has its own rule.
    pub fn volume_threshold(&self) -> Option<f64> {
        match self {
            Self::Doubled => Some(2.0),
            Self::Tripled => Some(3.0),
            Self::Collapsed => None,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Doubled => "Doubled",
            Self::Tripled => "Tripled",
            Self::Collapsed => "Collapsed",
        }
    }
}

impl std::fmt::Display for MilestoneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single recorded milestone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Milestone {
    /// Unique identity for list rendering and log correlation
    pub id: Uuid,
    /// What was crossed
    pub label: MilestoneLabel,
    /// Elapsed simulated time at the crossing
    pub time: Time,
}

impl Milestone {
    /// Create a milestone at the given elapsed time.
    pub fn new(label: MilestoneLabel, time: Time) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            time,
        }
    }
}

/// Insertion-ordered, label-keyed milestone ledger.
///
/// Append-only between resets: entries are never mutated or removed except
/// by [`MilestoneLog::clear`], and each label is recorded at most once.
#[derive(Clone, Debug, Default)]
pub struct MilestoneLog {
    entries: Vec<Milestone>,
    recorded: HashSet<MilestoneLabel>,
}

impl MilestoneLog {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a milestone unless its label was already recorded this run.
    ///
    /// Returns true when a new entry was appended.
    pub fn record(&mut self, label: MilestoneLabel, time: Time) -> bool {
        if !self.recorded.insert(label) {
            return false;
        }
        self.entries.push(Milestone::new(label, time));
        true
    }

    /// Whether a label has been recorded this run.
    pub fn contains(&self, label: MilestoneLabel) -> bool {
        self.recorded.contains(&label)
    }

    /// Recorded milestones in insertion order.
    pub fn entries(&self) -> &[Milestone] {
        &self.entries
    }

    /// Iterate over recorded milestones in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Milestone> {
        self.entries.iter()
    }

    /// The most recently recorded milestone.
    pub fn last(&self) -> Option<&Milestone> {
        self.entries.last()
    }

    /// Number of recorded milestones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything recorded this run.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recorded.clear();
    }
}
