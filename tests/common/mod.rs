#![allow(dead_code)]

use railspan::graph::{Edge, StationId, StationIndex};
use railspan::io::ConfigurablePrintTarget;
use railspan::solver::*;

pub fn quiet_settings() -> SolverSettings {
    SolverSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap()
}

/// One solver of each kind with output discarded.
pub fn quiet_solvers() -> Vec<SupportedSolver<u32>> {
    let mut solvers = SupportedSolver::all(&quiet_settings());
    for solver in solvers.iter_mut() {
        solver.print_to_sink();
    }
    solvers
}

/// Small linear congruential generator for reproducible networks.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// A connected network on `nstations` stations: a random spanning path
/// plus `nextra` random tunnels, shuffled.  Station ids differ from their
/// indices.
pub fn connected_network(
    rng: &mut Lcg,
    nstations: u32,
    nextra: usize,
    max_weight: u32,
) -> Vec<Edge<u32>> {
    let mut order: Vec<StationId> = (0..nstations).map(|i| 100 + 3 * i).collect();
    for i in (1..order.len()).rev() {
        let j = rng.below(i as u64 + 1) as usize;
        order.swap(i, j);
    }

    let mut edges: Vec<Edge<u32>> = order
        .windows(2)
        .map(|w| Edge::new(w[0], w[1], 1 + rng.below(max_weight as u64) as u32))
        .collect();

    for _ in 0..nextra {
        let a = order[rng.below(nstations as u64) as usize];
        let b = order[rng.below(nstations as u64) as usize];
        edges.push(Edge::new(a, b, 1 + rng.below(max_weight as u64) as u32));
    }

    for i in (1..edges.len()).rev() {
        let j = rng.below(i as u64 + 1) as usize;
        edges.swap(i, j);
    }
    edges
}

/// Replay `tree` over the stations of `network`, asserting that every
/// edge is a candidate and none closes a cycle.  Returns the number of
/// components left.
pub fn replay_components(network: &[Edge<u32>], tree: &[Edge<u32>]) -> usize {
    let stations = StationIndex::from_edges(network);
    let mut dsu = DisjointSet::new(stations.len());
    for edge in tree {
        assert!(network.contains(edge), "{} is not a candidate", edge);
        let (a, b) = stations.endpoints(edge);
        assert!(dsu.union(a, b), "{} closes a cycle", edge);
    }
    dsu.number_of_sets()
}
