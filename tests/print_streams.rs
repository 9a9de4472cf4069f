use railspan::{graph::Edge, io::ConfigurablePrintTarget, solver::*};

fn test_edges() -> Vec<Edge<u32>> {
    vec![Edge::new(1, 2, 4), Edge::new(2, 3, 2), Edge::new(1, 3, 5)]
}

fn test_print_solver() -> GreedySolver<u32> {
    GreedySolver::new(SolverSettings::default())
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver.solve(&test_edges());
    solver.report().unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver.solve(&test_edges());
    solver.report().unwrap();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("railspan"));
    assert!(result.contains("algorithm: Greedy"));
    assert!(result.contains("S2-S3, S1-S2"));
    assert!(result.contains("total weight: 6"));
    assert!(result.contains("metric: 2"));
    assert!(result.contains("timers:"));
    assert!(result.contains("    setup"));
}

#[test]
fn test_report_ignores_verbose() {
    let settings = SolverSettingsBuilder::default()
        .verbose(false)
        .station_prefix("E".to_string())
        .build()
        .unwrap();
    let mut solver = BacktrackingSolver::<u32>::new(settings);
    solver.print_to_buffer();
    solver.solve(&test_edges());
    solver.report().unwrap();

    let result = solver.get_print_buffer().unwrap();
    assert!(!result.contains("railspan"));
    assert!(result.starts_with("algorithm: Backtracking"));
    assert!(result.contains("E2-E3"));
    assert!(result.contains("E1-E2"));
    assert!(result.contains("total weight: 6"));
}

#[test]
fn test_report_without_spanning_tree() {
    let mut solver = SupportedSolver::<u32>::new(SolverKind::Backtracking, SolverSettings::default());
    solver.print_to_buffer();
    solver.solve(&[Edge::new(0, 1, 3), Edge::new(2, 3, 5)]);
    solver.report().unwrap();

    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("(no spanning tree)"));
    assert!(result.contains("status: Disconnected"));
    assert!(result.contains(&format!("total weight: {}", u32::MAX)));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.solve(&test_edges());
    solver.report().unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("railspan"));
    assert!(result.contains("S2-S3, S1-S2"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut solver = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.solve(&test_edges());

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("railspan"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver.solve(&test_edges());
    solver.report().unwrap();
    // no output
}
