use railspan::graph::Edge;
use railspan::io::*;
use railspan::solver::*;
use std::io::{Seek, SeekFrom};

fn main() {
    let tunnels = vec![
        Edge::new(1, 2, 12u64),
        Edge::new(2, 3, 9),
        Edge::new(1, 3, 25),
        Edge::new(3, 4, 14),
        Edge::new(2, 4, 31),
    ];

    let settings = SolverSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();

    // store the network with its settings
    let mut file = tempfile::tempfile().unwrap();
    write_network_to_file(&mut file, &tunnels, &settings).unwrap();

    // and load it back
    file.seek(SeekFrom::Start(0)).unwrap();
    let network = read_network_from_file::<u64>(&mut file).unwrap();

    let mut solver = BacktrackingSolver::new(network.settings);
    solver.solve(&network.edges);
    solver.report().unwrap();
}
