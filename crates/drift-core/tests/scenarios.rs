//! End-to-end behavioral scenarios
//!
//! Full runs over engineered populations, checking the drift dynamics the
//! model exists to produce.

use drift_core::{
    BuildError, ConfigError, CreatureState, DiffusionGate, SimConfig, Simulation, TopologyKind,
    TRUST_MAX, TRUST_MIN,
};
use drift_events::MemoryCollector;

fn seeded_config(seed: u64) -> SimConfig {
    let mut config = SimConfig::default();
    config.seed = Some(seed);
    config
}

/// A population of universal rejection drives the Creature to the vengeful
/// extreme and keeps every Human at the trust floor.
#[test]
fn test_all_fearful_population_turns_creature_vengeful() {
    let mut config = seeded_config(42);
    config.fearful_fraction = 1.0;
    config.compassionate_fraction = 0.0;

    let mut sim = Simulation::new(config).unwrap();
    let mut collector = MemoryCollector::new();
    sim.run(100, &mut collector).unwrap();

    assert_eq!(sim.creature_state(), CreatureState::Vengeful);
    assert_eq!(sim.creature().empathy(), 0.0);
    assert_eq!(sim.creature().resentment(), 10.0);

    let last = collector.last().unwrap();
    assert_eq!(last.trust_counts.fearful, 30);
    assert_eq!(last.trust_counts.neutral, 0);
    assert_eq!(last.trust_counts.compassionate, 0);
}

/// A population of universal acceptance never moves the Creature off its
/// peaceful starting point.
#[test]
fn test_all_compassionate_population_keeps_creature_peaceful() {
    let mut config = seeded_config(42);
    config.fearful_fraction = 0.0;
    config.compassionate_fraction = 1.0;

    let mut sim = Simulation::new(config).unwrap();
    let mut collector = MemoryCollector::new();
    sim.run(100, &mut collector).unwrap();

    for snapshot in collector.snapshots() {
        assert_eq!(snapshot.creature.state, "peaceful");
        assert_eq!(snapshot.creature.empathy, 10.0);
        assert_eq!(snapshot.creature.resentment, 0.0);
        assert_eq!(snapshot.trust_counts.compassionate, 30);
    }
}

/// With diffusion disabled, trust can only ever hold the three seeded
/// values: the floor, neutral, and the ceiling.
#[test]
fn test_disabled_broadcast_keeps_discrete_trust_levels() {
    let mut config = seeded_config(7);
    config.enable_broadcast = false;

    let mut sim = Simulation::new(config).unwrap();
    let mut collector = MemoryCollector::new();
    sim.run(200, &mut collector).unwrap();

    for human in sim.population().humans() {
        let trust = human.trust();
        assert!(
            trust == TRUST_MIN || trust == 0.0 || trust == TRUST_MAX,
            "unexpected trust level {trust} with broadcast disabled"
        );
    }
}

/// Under the default neutral-broadcaster gate, a zero-trust Human that
/// accepts the Creature diffuses to its fearful neighbors, so intermediate
/// trust values appear during the run.
#[test]
fn test_neutral_gate_diffusion_changes_trust() {
    let mut config = seeded_config(42);
    config.enable_broadcast = true;
    config.fearful_fraction = 0.2;
    config.compassionate_fraction = 0.4;
    assert_eq!(config.diffusion_gate, DiffusionGate::NeutralBroadcaster);

    let mut sim = Simulation::new(config).unwrap();
    let mut diffusion_seen = false;
    for _ in 0..500 {
        sim.step();
        let intermediate = sim.population().humans().iter().any(|human| {
            let trust = human.trust();
            trust != TRUST_MIN && trust != 0.0 && trust != TRUST_MAX
        });
        if intermediate {
            diffusion_seen = true;
            break;
        }
    }
    assert!(
        diffusion_seen,
        "neutral-gated diffusion never moved a neighbor's trust"
    );
}

/// With diffusion enabled, trust may take intermediate values but never
/// leaves its bounds.
#[test]
fn test_enabled_broadcast_keeps_trust_bounded() {
    let mut config = seeded_config(7);
    config.enable_broadcast = true;
    config.diffusion_gate = DiffusionGate::AnyAccept;

    let mut sim = Simulation::new(config).unwrap();
    let mut collector = MemoryCollector::new();
    sim.run(200, &mut collector).unwrap();

    for human in sim.population().humans() {
        assert!((TRUST_MIN..=TRUST_MAX).contains(&human.trust()));
    }
    for snapshot in collector.snapshots() {
        assert_eq!(snapshot.trust_counts.total(), 30);
    }
}

/// Asking for more Creature edges than there are Humans fails at build
/// time, not at the first tick.
#[test]
fn test_excess_creature_edges_fail_at_build() {
    let mut config = seeded_config(1);
    config.creature_initial_edges = config.population_size + 1;

    let result = Simulation::new(config);
    assert!(matches!(
        result,
        Err(BuildError::Config(ConfigError::CreatureEdgesOutOfRange {
            requested: 31,
            population: 30,
        }))
    ));
}

/// An undersized population rejects the default degree at build time.
#[test]
fn test_degree_too_high_fails_at_build() {
    let mut config = seeded_config(1);
    config.population_size = 4;
    config.creature_initial_edges = 2;

    let result = Simulation::new(config);
    assert!(matches!(
        result,
        Err(BuildError::Config(ConfigError::DegreeOutOfRange { .. }))
    ));
}

/// Snapshot IDs are sequential and aligned with their ticks.
#[test]
fn test_snapshot_ids_are_sequential() {
    let mut sim = Simulation::new(seeded_config(3)).unwrap();
    let mut collector = MemoryCollector::new();
    sim.run(10, &mut collector).unwrap();

    for (i, snapshot) in collector.snapshots().iter().enumerate() {
        let expected = i as u64 + 1;
        assert_eq!(snapshot.tick, expected);
        assert_eq!(snapshot.snapshot_id, format!("snap_{:06}", expected));
    }
}

/// The landmark grid variant supports the same full-run contract as the
/// small-world graph.
#[test]
fn test_landmark_grid_full_run() {
    let mut config = seeded_config(11);
    config.topology = TopologyKind::LandmarkGrid;

    let mut sim = Simulation::new(config).unwrap();
    let mut collector = MemoryCollector::new();
    sim.run(100, &mut collector).unwrap();

    assert_eq!(collector.len(), 100);
    assert!(sim.creature().position() < 4);
    for snapshot in collector.snapshots() {
        assert!((0.0..=10.0).contains(&snapshot.creature.empathy));
        assert!((0.0..=10.0).contains(&snapshot.creature.resentment));
        assert_eq!(snapshot.trust_counts.total(), 30);
    }
}
