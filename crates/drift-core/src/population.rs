//! Population assembly
//!
//! Builds the agent roster from a validated configuration and topology.
//! Human positions are fixed for the life of a run; only the Creature
//! moves. A node index keeps co-location lookups cheap on both topology
//! kinds.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use drift_events::TrustCounts;

use crate::config::SimConfig;
use crate::creature::Creature;
use crate::human::{Human, TrustLabel};
use crate::topology::{NodeId, Topology};

/// The Creature plus every Human, indexed by node for co-location queries.
#[derive(Debug, Clone)]
pub struct Population {
    pub creature: Creature,
    humans: Vec<Human>,
    humans_by_node: Vec<Vec<usize>>,
}

impl Population {
    /// Seeds the roster. Archetype counts come from truncating the
    /// configured fractions against the population size, with the
    /// remainder neutral; the shuffled label order and (on the grid) the
    /// landmark assignment both draw from `rng`.
    pub fn build(
        config: &SimConfig,
        topology: &Topology,
        creature_start: NodeId,
        rng: &mut SmallRng,
    ) -> Self {
        let n = config.population_size;
        let fearful = (config.fearful_fraction * n as f64) as usize;
        let compassionate = (config.compassionate_fraction * n as f64) as usize;
        let neutral = n - fearful - compassionate;

        let mut labels = Vec::with_capacity(n);
        labels.extend(std::iter::repeat(TrustLabel::Fearful).take(fearful));
        labels.extend(std::iter::repeat(TrustLabel::Compassionate).take(compassionate));
        labels.extend(std::iter::repeat(TrustLabel::Neutral).take(neutral));
        labels.shuffle(rng);

        let grid_nodes = !topology.landmarks().is_empty();
        let mut humans_by_node: Vec<Vec<usize>> = vec![Vec::new(); topology.node_count()];
        let mut humans = Vec::with_capacity(n);
        for (i, label) in labels.into_iter().enumerate() {
            let node = if grid_nodes {
                // landmark grid: Humans scatter across the fixed sites
                rng.gen_range(0..topology.landmarks().len())
            } else {
                // small world: Human i lives on node i
                i
            };
            humans_by_node[node].push(i);
            humans.push(Human::new(label, node));
        }

        Self {
            creature: Creature::new(creature_start, config.max_emotion),
            humans,
            humans_by_node,
        }
    }

    pub fn humans(&self) -> &[Human] {
        &self.humans
    }

    pub fn human(&self, index: usize) -> &Human {
        &self.humans[index]
    }

    pub fn human_mut(&mut self, index: usize) -> &mut Human {
        &mut self.humans[index]
    }

    pub fn human_count(&self) -> usize {
        self.humans.len()
    }

    /// Indices of the Humans living at `node`.
    pub fn humans_at(&self, node: NodeId) -> &[usize] {
        &self.humans_by_node[node]
    }

    /// Current archetype label tally across the population.
    pub fn trust_counts(&self) -> TrustCounts {
        let mut counts = TrustCounts::default();
        for human in &self.humans {
            match human.label() {
                TrustLabel::Fearful => counts.fearful += 1,
                TrustLabel::Neutral => counts.neutral += 1,
                TrustLabel::Compassionate => counts.compassionate += 1,
            }
        }
        counts
    }

    /// Diffuses the broadcaster's trust to strictly-lower-trust Humans on
    /// neighboring nodes. No-op for negative-trust broadcasters; a
    /// zero-trust broadcaster still reaches its fearful neighbors.
    pub fn broadcast_trust(&mut self, broadcaster: usize, topology: &Topology, increment: f64) {
        let source_trust = self.humans[broadcaster].trust();
        if source_trust < 0.0 {
            return;
        }
        let source_node = self.humans[broadcaster].position();
        for &node in topology.neighbors(source_node) {
            for i in 0..self.humans_by_node[node].len() {
                let target = self.humans_by_node[node][i];
                if target != broadcaster && self.humans[target].trust() < source_trust {
                    self.humans[target].receive_broadcast(increment);
                }
            }
        }
    }
}
