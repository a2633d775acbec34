//! Simulation configuration
//!
//! All run parameters live in a single TOML file. Every field has a
//! default, so an empty file (or no file at all) yields the standard
//! 30-Human small-world setup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::creature::EmotionThresholds;
use crate::error::ConfigError;

/// Which social structure the Humans inhabit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    /// Watts-Strogatz small-world graph, one Human per node.
    #[default]
    SmallWorld,
    /// Four fixed landmarks; agents relocate between them freely.
    LandmarkGrid,
}

/// Gate deciding whether an Accept outcome triggers a trust broadcast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffusionGate {
    /// Every accepting Human with positive trust broadcasts.
    AnyAccept,
    /// Only Humans sitting at the neutral trust label broadcast, zero
    /// trust included.
    #[default]
    NeutralBroadcaster,
}

/// Main simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of Human agents.
    pub population_size: usize,
    /// Fraction of Humans seeded fearful (trust -1.0).
    pub fearful_fraction: f64,
    /// Fraction of Humans seeded compassionate (trust 1.0).
    pub compassionate_fraction: f64,
    /// Target degree for the small-world ring lattice (k).
    pub average_node_degree: usize,
    /// Watts-Strogatz edge rewiring probability (beta).
    pub rewiring_probability: f64,
    /// Edges connecting the Creature's node into the Human graph.
    pub creature_initial_edges: usize,
    /// Scale ceiling for empathy and resentment.
    pub max_emotion: f64,
    /// Vengeful resentment threshold. Defaults to 0.75 * max_emotion.
    pub resentment_threshold: Option<f64>,
    /// Vengeful empathy threshold. Defaults to 0.25 * max_emotion.
    pub empathy_threshold: Option<f64>,
    /// Whether Accept outcomes may nudge neighboring Humans' trust.
    pub enable_broadcast: bool,
    /// Trust added to each lower-trust neighbor on broadcast.
    pub broadcast_increment: f64,
    /// Which Humans are allowed to broadcast.
    pub diffusion_gate: DiffusionGate,
    /// Social structure the agents inhabit.
    pub topology: TopologyKind,
    /// RNG seed. None draws from entropy (non-reproducible run).
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            fearful_fraction: 0.4,
            compassionate_fraction: 0.2,
            average_node_degree: 4,
            rewiring_probability: 0.1,
            creature_initial_edges: 3,
            max_emotion: 10.0,
            resentment_threshold: None,
            empathy_threshold: None,
            enable_broadcast: false,
            broadcast_increment: 0.1,
            diffusion_gate: DiffusionGate::default(),
            topology: TopologyKind::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::NonPositivePopulation);
        }

        for (name, value) in [
            ("fearful_fraction", self.fearful_fraction),
            ("compassionate_fraction", self.compassionate_fraction),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FractionOutOfRange { name, value });
            }
        }
        if self.fearful_fraction + self.compassionate_fraction > 1.0 {
            return Err(ConfigError::FractionSumExceedsOne);
        }

        if self.topology == TopologyKind::SmallWorld {
            if self.average_node_degree < 1 || self.average_node_degree >= self.population_size {
                return Err(ConfigError::DegreeOutOfRange {
                    degree: self.average_node_degree,
                    population: self.population_size,
                });
            }
            if !self.rewiring_probability.is_finite()
                || !(0.0..=1.0).contains(&self.rewiring_probability)
            {
                return Err(ConfigError::RewiringOutOfRange);
            }
            if self.creature_initial_edges < 1 || self.creature_initial_edges > self.population_size {
                return Err(ConfigError::CreatureEdgesOutOfRange {
                    requested: self.creature_initial_edges,
                    population: self.population_size,
                });
            }
        }

        if !self.max_emotion.is_finite() || self.max_emotion <= 0.0 {
            return Err(ConfigError::NonPositiveMaxEmotion);
        }
        for (name, value) in [
            ("resentment_threshold", self.resentment_threshold),
            ("empathy_threshold", self.empathy_threshold),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 || v > self.max_emotion {
                    return Err(ConfigError::ThresholdOutOfRange { name });
                }
            }
        }

        if !self.broadcast_increment.is_finite() || self.broadcast_increment < 0.0 {
            return Err(ConfigError::BroadcastIncrementOutOfRange);
        }

        Ok(())
    }

    /// Resolves the effective emotion thresholds for this run.
    pub fn thresholds(&self) -> EmotionThresholds {
        let defaults = EmotionThresholds::from_scale(self.max_emotion);
        EmotionThresholds {
            max_emotion: self.max_emotion,
            resentment: self.resentment_threshold.unwrap_or(defaults.resentment),
            empathy: self.empathy_threshold.unwrap_or(defaults.empathy),
        }
    }
}
