//! Snapshot Types
//!
//! Serialization structs for per-tick simulation output.
//!
//! A snapshot captures the aggregate state the data-collection layer cares
//! about: how many Humans currently carry each trust label, and where the
//! Creature's emotions and derived state stand.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// Number of Humans per trust label at snapshot time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustCounts {
    pub fearful: usize,
    pub neutral: usize,
    pub compassionate: usize,
}

impl TrustCounts {
    /// Creates a new TrustCounts.
    pub fn new(fearful: usize, neutral: usize, compassionate: usize) -> Self {
        Self {
            fearful,
            neutral,
            compassionate,
        }
    }

    /// Total population represented by the counts.
    pub fn total(&self) -> usize {
        self.fearful + self.neutral + self.compassionate
    }
}

/// The Creature's emotional state at snapshot time.
///
/// `state` is the derived disposition name ("peaceful", "cautious",
/// "vengeful"); `state_ordinal` is the same value as 0/1/2 for callers that
/// average across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSnapshot {
    pub empathy: f64,
    pub resentment: f64,
    pub state: String,
    pub state_ordinal: u8,
}

impl CreatureSnapshot {
    /// Creates a new CreatureSnapshot.
    pub fn new(empathy: f64, resentment: f64, state: impl Into<String>, state_ordinal: u8) -> Self {
        Self {
            empathy,
            resentment,
            state: state.into(),
            state_ordinal,
        }
    }
}

/// Complete per-tick snapshot handed to the data collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub snapshot_id: String,
    pub tick: u64,
    pub creature: CreatureSnapshot,
    pub trust_counts: TrustCounts,
}

impl TickSnapshot {
    /// Creates a new TickSnapshot.
    pub fn new(
        snapshot_id: impl Into<String>,
        tick: u64,
        creature: CreatureSnapshot,
        trust_counts: TrustCounts,
    ) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            tick,
            creature,
            trust_counts,
        }
    }

    /// Serializes the snapshot to compact JSON (one JSONL line).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the snapshot to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
