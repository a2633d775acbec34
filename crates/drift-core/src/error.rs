//! Error types for configuration and world construction.

use thiserror::Error;

/// Raised when a configuration value fails validation or the file cannot
/// be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    NonPositivePopulation,

    #[error("{name} must be in [0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },

    #[error("fearful_fraction + compassionate_fraction must not exceed 1")]
    FractionSumExceedsOne,

    #[error("average_node_degree ({degree}) must be at least 1 and below population_size ({population})")]
    DegreeOutOfRange { degree: usize, population: usize },

    #[error("rewiring_probability must be in [0, 1]")]
    RewiringOutOfRange,

    #[error("creature_initial_edges ({requested}) must be between 1 and population_size ({population})")]
    CreatureEdgesOutOfRange { requested: usize, population: usize },

    #[error("max_emotion must be finite and greater than 0")]
    NonPositiveMaxEmotion,

    #[error("{name} must be finite, greater than 0, and at most max_emotion")]
    ThresholdOutOfRange { name: &'static str },

    #[error("broadcast_increment must be finite and non-negative")]
    BroadcastIncrementOutOfRange,

    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Raised when the social graph cannot be constructed.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("average degree ({degree}) must be below the number of nodes ({population})")]
    DegreeTooHigh { degree: usize, population: usize },

    #[error("cannot build a topology over an empty population")]
    EmptyPopulation,
}

/// Raised by [`Simulation::new`](crate::engine::Simulation::new) when the
/// world cannot be assembled from the given configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}
