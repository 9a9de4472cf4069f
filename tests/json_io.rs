#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use railspan::{graph::Edge, io::*, solver::*};
    use std::io::{Seek, SeekFrom};

    let edges = vec![
        Edge::new(1, 2, 4u32),
        Edge::new(2, 3, 2),
        Edge::new(1, 3, 5),
        Edge::new(3, 4, 1),
    ];
    let settings = SolverSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();

    let mut solver = GreedySolver::<u32>::new(settings.clone());
    solver.solve(&edges);

    // write the network to a file
    let mut file = tempfile::tempfile().unwrap();
    write_network_to_file(&mut file, &edges, solver.settings()).unwrap();

    // read it back and solve with the stored settings
    file.seek(SeekFrom::Start(0)).unwrap();
    let network = read_network_from_file::<u32>(&mut file).unwrap();
    assert_eq!(network.settings, settings);

    let mut solver2 = BacktrackingSolver::<u32>::new(network.settings);
    solver2.solve(&network.edges);
    assert_eq!(solver.total_weight(), solver2.total_weight());
    assert_eq!(solver2.total_weight(), Some(7));
}
