mod common;

use common::*;
use railspan::graph::Edge;
use railspan::io::*;
use railspan::solver::*;
use std::io::Write;

#[test]
fn test_solve_edge_list_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "S1;S2;4").unwrap();
    writeln!(file, "S2;S3;2").unwrap();
    writeln!(file).unwrap();
    writeln!(file, " S1 ; S3 ; 5 ").unwrap();
    file.flush().unwrap();

    let edges = read_edge_list_from_path::<u32, _>(file.path()).unwrap();
    assert_eq!(
        edges,
        vec![Edge::new(1, 2, 4), Edge::new(2, 3, 2), Edge::new(1, 3, 5)]
    );

    for mut solver in quiet_solvers() {
        solver.solve(&edges);
        assert_eq!(solver.total_weight(), Some(6));
    }
}

#[test]
fn test_edge_list_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_edge_list_from_path::<u32, _>(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(EdgeListError::Io(_))));
}

#[test]
fn test_edge_list_reports_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "S1;S2;4").unwrap();
    writeln!(file, "S2;S3;heavy").unwrap();
    file.flush().unwrap();

    match read_edge_list_from_path::<u32, _>(file.path()) {
        Err(EdgeListError::BadWeight { line, .. }) => assert_eq!(line, 2),
        other => panic!("unexpected result {:?}", other),
    }
}
