//! Social topology
//!
//! Two structures share one adjacency representation. The small-world
//! variant is a Watts-Strogatz graph built in two phases: first the Human
//! ring lattice with rewiring, then one extra node for the Creature wired
//! in with a fixed number of edges. The landmark grid variant is four
//! named sites that every agent can reach from anywhere, so its adjacency
//! is the complete graph over the landmarks.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::error::TopologyError;

/// Index of a node in the topology's adjacency list.
pub type NodeId = usize;

/// A fixed named site on the landmark grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    pub name: &'static str,
    pub x: u32,
    pub y: u32,
}

/// The four sites of the landmark grid, in node-id order.
pub const LANDMARKS: [Landmark; 4] = [
    Landmark { name: "forest", x: 1, y: 1 },
    Landmark { name: "village", x: 8, y: 1 },
    Landmark { name: "cottage", x: 1, y: 8 },
    Landmark { name: "market", x: 8, y: 8 },
];

/// Attempts per rewired edge to find a valid new endpoint before giving up
/// and keeping the original edge.
const REWIRE_ATTEMPTS: usize = 16;

/// Undirected graph the agents move on.
#[derive(Debug, Clone)]
pub struct Topology {
    adjacency: Vec<Vec<NodeId>>,
    landmarks: Vec<Landmark>,
    creature_node: Option<NodeId>,
}

impl Topology {
    /// Builds a Watts-Strogatz small-world graph over `n` Human nodes.
    ///
    /// Starts from a ring lattice where each node connects to `k / 2`
    /// neighbors per side, then rewires each edge's far endpoint with
    /// probability `beta`. Self-loops and duplicate edges are never
    /// created; a rewire that cannot find a valid target keeps the
    /// original edge.
    pub fn small_world(
        n: usize,
        k: usize,
        beta: f64,
        rng: &mut SmallRng,
    ) -> Result<Self, TopologyError> {
        if n == 0 {
            return Err(TopologyError::EmptyPopulation);
        }
        if k >= n {
            return Err(TopologyError::DegreeTooHigh {
                degree: k,
                population: n,
            });
        }

        let mut topology = Self {
            adjacency: vec![Vec::new(); n],
            landmarks: Vec::new(),
            creature_node: None,
        };

        // Ring lattice: each node linked to k/2 neighbors on each side.
        for node in 0..n {
            for offset in 1..=(k / 2) {
                let neighbor = (node + offset) % n;
                if !topology.has_edge(node, neighbor) {
                    topology.add_edge(node, neighbor);
                }
            }
        }

        // Rewire each lattice edge's far endpoint with probability beta.
        for node in 0..n {
            for offset in 1..=(k / 2) {
                let old_neighbor = (node + offset) % n;
                if !rng.gen_bool(beta) {
                    continue;
                }
                for _ in 0..REWIRE_ATTEMPTS {
                    let candidate = rng.gen_range(0..n);
                    if candidate == node || topology.has_edge(node, candidate) {
                        continue;
                    }
                    topology.remove_edge(node, old_neighbor);
                    topology.add_edge(node, candidate);
                    break;
                }
            }
        }

        Ok(topology)
    }

    /// Builds the four-landmark grid. Every landmark is reachable from
    /// every other, and the Creature conventionally starts at the forest.
    pub fn landmark_grid() -> Self {
        let n = LANDMARKS.len();
        let mut topology = Self {
            adjacency: vec![Vec::new(); n],
            landmarks: LANDMARKS.to_vec(),
            creature_node: Some(0),
        };
        for a in 0..n {
            for b in (a + 1)..n {
                topology.add_edge(a, b);
            }
        }
        topology
    }

    /// Appends the Creature's node and wires it to `requested` distinct
    /// Human nodes (clamped to the population). Returns the new node's id.
    pub fn attach_creature(&mut self, requested: usize, rng: &mut SmallRng) -> NodeId {
        let population = self.adjacency.len();
        let creature = population;
        self.adjacency.push(Vec::new());

        let edges = requested.min(population);
        let targets = rand::seq::index::sample(rng, population, edges);
        for target in targets {
            self.add_edge(creature, target);
        }

        self.creature_node = Some(creature);
        creature
    }

    /// Nodes an agent at `from` may move to this tick.
    ///
    /// On the landmark grid every site (including the current one) is a
    /// valid destination; on a graph, only adjacent nodes are.
    pub fn movement_targets(&self, from: NodeId) -> Vec<NodeId> {
        if self.landmarks.is_empty() {
            self.adjacency[from].clone()
        } else {
            (0..self.landmarks.len()).collect()
        }
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node]
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node].len()
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency[a].contains(&b)
    }

    pub fn creature_node(&self) -> Option<NodeId> {
        self.creature_node
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        self.adjacency[a].retain(|&n| n != b);
        self.adjacency[b].retain(|&n| n != a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_ring_lattice_without_rewiring() {
        let mut rng = SmallRng::seed_from_u64(1);
        let topology = Topology::small_world(10, 4, 0.0, &mut rng).unwrap();

        assert_eq!(topology.node_count(), 10);
        // n * k / 2 edges in a clean lattice
        assert_eq!(topology.edge_count(), 20);
        for node in 0..10 {
            assert_eq!(topology.degree(node), 4);
            assert!(topology.has_edge(node, (node + 1) % 10));
            assert!(topology.has_edge(node, (node + 2) % 10));
        }
    }

    #[test]
    fn test_rewiring_preserves_edge_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        let topology = Topology::small_world(30, 4, 0.5, &mut rng).unwrap();
        assert_eq!(topology.edge_count(), 60);
        for node in 0..30 {
            assert!(!topology.has_edge(node, node));
        }
    }

    #[test]
    fn test_full_rewiring_stays_valid() {
        let mut rng = SmallRng::seed_from_u64(3);
        let topology = Topology::small_world(20, 4, 1.0, &mut rng).unwrap();
        assert_eq!(topology.edge_count(), 40);
        for node in 0..20 {
            let neighbors = topology.neighbors(node);
            let mut sorted = neighbors.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), neighbors.len(), "duplicate edge at {node}");
            assert!(!neighbors.contains(&node));
        }
    }

    #[test]
    fn test_degree_too_high_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let result = Topology::small_world(4, 4, 0.1, &mut rng);
        assert!(matches!(
            result,
            Err(TopologyError::DegreeTooHigh { degree: 4, population: 4 })
        ));
    }

    #[test]
    fn test_empty_population_rejected() {
        let mut rng = SmallRng::seed_from_u64(1);
        let result = Topology::small_world(0, 0, 0.1, &mut rng);
        assert!(matches!(result, Err(TopologyError::EmptyPopulation)));
    }

    #[test]
    fn test_attach_creature() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut topology = Topology::small_world(10, 4, 0.1, &mut rng).unwrap();
        let creature = topology.attach_creature(3, &mut rng);

        assert_eq!(creature, 10);
        assert_eq!(topology.node_count(), 11);
        assert_eq!(topology.degree(creature), 3);
        assert_eq!(topology.creature_node(), Some(creature));
        for &neighbor in topology.neighbors(creature) {
            assert!(neighbor < 10);
            assert!(topology.has_edge(neighbor, creature));
        }
    }

    #[test]
    fn test_attach_creature_clamps_to_population() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut topology = Topology::small_world(5, 2, 0.0, &mut rng).unwrap();
        let creature = topology.attach_creature(50, &mut rng);
        assert_eq!(topology.degree(creature), 5);
    }

    #[test]
    fn test_landmark_grid() {
        let topology = Topology::landmark_grid();
        assert_eq!(topology.node_count(), 4);
        assert_eq!(topology.edge_count(), 6);
        assert_eq!(topology.creature_node(), Some(0));
        assert_eq!(topology.landmarks()[0].name, "forest");
        assert_eq!(topology.landmarks()[3].name, "market");
    }

    #[test]
    fn test_movement_targets() {
        let grid = Topology::landmark_grid();
        // grid movement may stay put
        assert_eq!(grid.movement_targets(2), vec![0, 1, 2, 3]);

        let mut rng = SmallRng::seed_from_u64(9);
        let graph = Topology::small_world(10, 2, 0.0, &mut rng).unwrap();
        let targets = graph.movement_targets(0);
        assert_eq!(targets.len(), 2);
        assert!(!targets.contains(&0));
    }

    #[test]
    fn test_same_seed_same_graph() {
        let build = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut topology = Topology::small_world(30, 4, 0.3, &mut rng).unwrap();
            topology.attach_creature(3, &mut rng);
            topology
        };
        let a = build(42);
        let b = build(42);
        for node in 0..a.node_count() {
            assert_eq!(a.neighbors(node), b.neighbors(node));
        }
    }
}
