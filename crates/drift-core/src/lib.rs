//! Moral Drift Simulation Engine Library
//!
//! Public API for the simulation engine: one Creature agent whose
//! disposition drifts between peaceful, cautious, and vengeful as a
//! population of Humans with fixed positions and mutable trust accepts or
//! rejects it.

pub mod config;
pub mod creature;
pub mod engine;
pub mod error;
pub mod human;
pub mod population;
pub mod topology;

pub use config::{DiffusionGate, SimConfig, TopologyKind};
pub use creature::{Creature, CreatureState, EmotionThresholds, Outcome};
pub use engine::Simulation;
pub use error::{BuildError, ConfigError, TopologyError};
pub use human::{Human, TrustLabel, TRUST_MAX, TRUST_MIN};
pub use population::Population;
pub use topology::{Landmark, NodeId, Topology, LANDMARKS};
