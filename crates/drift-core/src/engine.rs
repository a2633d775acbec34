//! Simulation clock
//!
//! Owns the assembled world and advances it one tick at a time. A tick is
//! exactly: one Creature move, one full pass over the agent roster in
//! randomized order (Human steps are no-ops; the Creature's step runs the
//! interaction sequence), then one snapshot. Every random draw comes from
//! the single seeded generator threaded through construction, so a run is
//! fully reproducible from its seed.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use drift_events::{
    generate_snapshot_id, CollectError, Collector, CreatureSnapshot, TickSnapshot,
};

use crate::config::{DiffusionGate, SimConfig, TopologyKind};
use crate::creature::{Creature, CreatureState, EmotionThresholds, Outcome};
use crate::error::BuildError;
use crate::human::TrustLabel;
use crate::population::Population;
use crate::topology::Topology;

/// Roster entry for the randomized per-tick pass.
#[derive(Debug, Clone, Copy)]
enum AgentSlot {
    Creature,
    Human(usize),
}

/// A fully constructed simulation, ready to tick.
pub struct Simulation {
    config: SimConfig,
    thresholds: EmotionThresholds,
    topology: Topology,
    population: Population,
    activation: Vec<AgentSlot>,
    rng: SmallRng,
    tick: u64,
    snapshot_seq: u64,
}

impl Simulation {
    /// Validates the configuration and assembles the world. All failures
    /// surface here; once constructed, every tick succeeds.
    pub fn new(config: SimConfig) -> Result<Self, BuildError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let (topology, creature_start) = match config.topology {
            TopologyKind::SmallWorld => {
                let mut topology = Topology::small_world(
                    config.population_size,
                    config.average_node_degree,
                    config.rewiring_probability,
                    &mut rng,
                )?;
                let start = topology.attach_creature(config.creature_initial_edges, &mut rng);
                (topology, start)
            }
            TopologyKind::LandmarkGrid => {
                let topology = Topology::landmark_grid();
                let start = topology.creature_node().unwrap_or(0);
                (topology, start)
            }
        };

        let population = Population::build(&config, &topology, creature_start, &mut rng);

        let mut activation = Vec::with_capacity(population.human_count() + 1);
        activation.push(AgentSlot::Creature);
        for i in 0..population.human_count() {
            activation.push(AgentSlot::Human(i));
        }

        info!(
            humans = population.human_count(),
            nodes = topology.node_count(),
            edges = topology.edge_count(),
            seed = ?config.seed,
            topology = ?config.topology,
            "simulation built"
        );

        Ok(Self {
            thresholds: config.thresholds(),
            config,
            topology,
            population,
            activation,
            rng,
            tick: 0,
            snapshot_seq: 0,
        })
    }

    /// Advances one tick and returns its snapshot.
    pub fn step(&mut self) -> TickSnapshot {
        self.move_creature();

        // Randomized activation pass. Humans take no action of their own;
        // the Creature's slot runs the interaction sequence.
        let mut activation = std::mem::take(&mut self.activation);
        activation.shuffle(&mut self.rng);
        for slot in &activation {
            if let AgentSlot::Creature = slot {
                self.creature_interact();
            }
        }
        self.activation = activation;

        self.tick += 1;
        self.snapshot_seq += 1;
        let snapshot = self.snapshot();
        debug!(
            tick = snapshot.tick,
            state = %snapshot.creature.state,
            fearful = snapshot.trust_counts.fearful,
            neutral = snapshot.trust_counts.neutral,
            compassionate = snapshot.trust_counts.compassionate,
            "tick complete"
        );
        snapshot
    }

    /// Runs `ticks` ticks, handing each snapshot to the collector.
    pub fn run(&mut self, ticks: u64, collector: &mut dyn Collector) -> Result<(), CollectError> {
        for _ in 0..ticks {
            let snapshot = self.step();
            collector.record(&snapshot)?;
        }
        Ok(())
    }

    /// Relocates the Creature to a uniformly random movement target.
    /// No-op when the current node has none.
    fn move_creature(&mut self) {
        let targets = self.topology.movement_targets(self.population.creature.position());
        if let Some(&node) = targets.choose(&mut self.rng) {
            self.population.creature.relocate(node);
        }
    }

    /// Runs the Creature's encounter sequence against every Human at its
    /// current node. The Creature's state is recomputed before each
    /// encounter, so one tick can cross a threshold mid-pass.
    fn creature_interact(&mut self) {
        let node = self.population.creature.position();
        let co_located: Vec<usize> = self.population.humans_at(node).to_vec();

        for index in co_located {
            let state = self.population.creature.state(&self.thresholds);
            let outcome = self
                .population
                .human_mut(index)
                .interact(state, &mut self.rng);

            self.population
                .creature
                .update_emotions(outcome, &self.thresholds);
            self.population.human_mut(index).learn(outcome);

            if self.config.enable_broadcast && outcome == Outcome::Accept {
                // any_accept requires positive trust; the neutral gate
                // admits zero-trust broadcasters
                let qualifies = match self.config.diffusion_gate {
                    DiffusionGate::AnyAccept => self.population.human(index).trust() > 0.0,
                    DiffusionGate::NeutralBroadcaster => {
                        self.population.human(index).label() == TrustLabel::Neutral
                    }
                };
                if qualifies {
                    self.population.broadcast_trust(
                        index,
                        &self.topology,
                        self.config.broadcast_increment,
                    );
                }
            }
        }
    }

    /// Snapshot of the current state under the current sequence number.
    pub fn snapshot(&self) -> TickSnapshot {
        let state = self.creature_state();
        TickSnapshot::new(
            generate_snapshot_id(self.snapshot_seq),
            self.tick,
            CreatureSnapshot::new(
                self.population.creature.empathy(),
                self.population.creature.resentment(),
                state.to_string(),
                state.ordinal(),
            ),
            self.population.trust_counts(),
        )
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn creature(&self) -> &Creature {
        &self.population.creature
    }

    pub fn creature_state(&self) -> CreatureState {
        self.population.creature.state(&self.thresholds)
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn thresholds(&self) -> &EmotionThresholds {
        &self.thresholds
    }
}
