//! Human agents
//!
//! Humans carry one continuous trust value in [-1, 1]. An archetype label
//! only seeds the initial value; from then on trust moves through
//! encounters with the Creature and neighbor broadcasts, and the label is
//! re-derived from the value whenever counts are reported.

use std::fmt;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::creature::{CreatureState, Outcome};
use crate::topology::NodeId;

pub const TRUST_MIN: f64 = -1.0;
pub const TRUST_MAX: f64 = 1.0;

/// Trust below or at this value reads as fearful; at or above its negation,
/// compassionate.
const FEARFUL_CUTOFF: f64 = -0.5;

/// Archetype label derived from a trust value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustLabel {
    Fearful,
    Neutral,
    Compassionate,
}

impl TrustLabel {
    /// Labels a trust value: [-1, -0.5] fearful, [0.5, 1] compassionate,
    /// everything between neutral.
    pub fn from_trust(trust: f64) -> Self {
        if trust <= FEARFUL_CUTOFF {
            TrustLabel::Fearful
        } else if trust >= -FEARFUL_CUTOFF {
            TrustLabel::Compassionate
        } else {
            TrustLabel::Neutral
        }
    }

    /// Trust value a Human seeded with this archetype starts at.
    pub fn initial_trust(&self) -> f64 {
        match self {
            TrustLabel::Fearful => TRUST_MIN,
            TrustLabel::Neutral => 0.0,
            TrustLabel::Compassionate => TRUST_MAX,
        }
    }
}

impl fmt::Display for TrustLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustLabel::Fearful => write!(f, "fearful"),
            TrustLabel::Neutral => write!(f, "neutral"),
            TrustLabel::Compassionate => write!(f, "compassionate"),
        }
    }
}

/// A Human agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Human {
    trust: f64,
    position: NodeId,
}

impl Human {
    pub fn new(label: TrustLabel, position: NodeId) -> Self {
        Self {
            trust: label.initial_trust(),
            position,
        }
    }

    pub fn trust(&self) -> f64 {
        self.trust
    }

    pub fn position(&self) -> NodeId {
        self.position
    }

    pub fn label(&self) -> TrustLabel {
        TrustLabel::from_trust(self.trust)
    }

    /// Responds to an approach by the Creature.
    ///
    /// Facing a vengeful Creature the Human's trust collapses to the floor
    /// and the encounter is rejected regardless of prior trust. Otherwise
    /// the sign of trust decides, with a coin flip at exactly zero.
    pub fn interact(&mut self, creature_state: CreatureState, rng: &mut SmallRng) -> Outcome {
        if creature_state == CreatureState::Vengeful {
            self.trust = TRUST_MIN;
            return Outcome::Reject;
        }
        if self.trust < 0.0 {
            Outcome::Reject
        } else if self.trust > 0.0 {
            Outcome::Accept
        } else if rng.gen_bool(0.5) {
            Outcome::Accept
        } else {
            Outcome::Reject
        }
    }

    /// A floor-trust Human who nonetheless accepted softens to neutral.
    pub fn learn(&mut self, outcome: Outcome) {
        if self.trust == TRUST_MIN && outcome == Outcome::Accept {
            self.trust = 0.0;
        }
    }

    /// Receives a higher-trust neighbor's broadcast, capped at the trust
    /// ceiling.
    pub fn receive_broadcast(&mut self, increment: f64) {
        self.trust = (self.trust + increment).min(TRUST_MAX);
    }
}
