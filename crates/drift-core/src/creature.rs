//! The Creature agent
//!
//! One Creature wanders the topology carrying two bounded emotions,
//! empathy and resentment. Its behavioral state is never stored: it is
//! recomputed from the emotions against the run's thresholds every time
//! it is needed, so state transitions are reversible in both directions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::topology::NodeId;

/// Result of a single Creature-Human encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accept,
    Reject,
}

/// Behavioral disposition derived from the Creature's emotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureState {
    Peaceful,
    Cautious,
    Vengeful,
}

impl CreatureState {
    /// Numeric form for aggregation across runs: 0, 1, or 2.
    pub fn ordinal(&self) -> u8 {
        match self {
            CreatureState::Peaceful => 0,
            CreatureState::Cautious => 1,
            CreatureState::Vengeful => 2,
        }
    }
}

impl fmt::Display for CreatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatureState::Peaceful => write!(f, "peaceful"),
            CreatureState::Cautious => write!(f, "cautious"),
            CreatureState::Vengeful => write!(f, "vengeful"),
        }
    }
}

/// Resentment threshold defaults to this fraction of the emotion scale.
pub const DEFAULT_RESENTMENT_FACTOR: f64 = 0.75;
/// Empathy threshold defaults to this fraction of the emotion scale.
pub const DEFAULT_EMPATHY_FACTOR: f64 = 0.25;

/// Fraction of the resentment threshold at which the Creature turns
/// cautious.
const CAUTIOUS_FACTOR: f64 = 0.6;

/// Effective emotion bounds and state-transition cutoffs for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionThresholds {
    pub max_emotion: f64,
    pub resentment: f64,
    pub empathy: f64,
}

impl EmotionThresholds {
    /// Derives the standard thresholds from an emotion scale ceiling.
    pub fn from_scale(max_emotion: f64) -> Self {
        Self {
            max_emotion,
            resentment: DEFAULT_RESENTMENT_FACTOR * max_emotion,
            empathy: DEFAULT_EMPATHY_FACTOR * max_emotion,
        }
    }
}

/// The single Creature agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    empathy: f64,
    resentment: f64,
    position: NodeId,
}

impl Creature {
    /// Starts the Creature fully empathetic and unresentful.
    pub fn new(position: NodeId, max_emotion: f64) -> Self {
        Self {
            empathy: max_emotion,
            resentment: 0.0,
            position,
        }
    }

    pub fn empathy(&self) -> f64 {
        self.empathy
    }

    pub fn resentment(&self) -> f64 {
        self.resentment
    }

    pub fn position(&self) -> NodeId {
        self.position
    }

    pub fn relocate(&mut self, node: NodeId) {
        self.position = node;
    }

    /// Current behavioral state under the given thresholds.
    pub fn state(&self, thresholds: &EmotionThresholds) -> CreatureState {
        Self::classify(self.empathy, self.resentment, thresholds)
    }

    /// Classifies an emotion pair. Vengeful requires both high resentment
    /// and low empathy and is checked first; cautious triggers earlier, at
    /// a fraction of the resentment threshold.
    pub fn classify(
        empathy: f64,
        resentment: f64,
        thresholds: &EmotionThresholds,
    ) -> CreatureState {
        if resentment > thresholds.resentment && empathy < thresholds.empathy {
            CreatureState::Vengeful
        } else if resentment > CAUTIOUS_FACTOR * thresholds.resentment {
            CreatureState::Cautious
        } else {
            CreatureState::Peaceful
        }
    }

    /// Shifts both emotions one unit in response to an encounter, clamped
    /// to [0, max_emotion].
    pub fn update_emotions(&mut self, outcome: Outcome, thresholds: &EmotionThresholds) {
        let (d_empathy, d_resentment) = match outcome {
            Outcome::Accept => (1.0, -1.0),
            Outcome::Reject => (-1.0, 1.0),
        };
        self.empathy = (self.empathy + d_empathy).clamp(0.0, thresholds.max_emotion);
        self.resentment = (self.resentment + d_resentment).clamp(0.0, thresholds.max_emotion);
    }
}
