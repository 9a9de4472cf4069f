use railspan::io::read_edge_list_from_path;
use railspan::solver::*;
use std::env;
use std::path::PathBuf;

fn main() {
    // dataset path from the command line, or the bundled one
    let path = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let cargo_dir =
                env::var("CARGO_MANIFEST_DIR").expect("Failed to get CARGO_MANIFEST_DIR");
            PathBuf::from(cargo_dir)
                .join("demos")
                .join("data")
                .join("dataset1.txt")
        }
    };

    let tunnels = read_edge_list_from_path::<u32, _>(&path).unwrap();

    let settings = SolverSettingsBuilder::default()
        .station_prefix("E".to_string())
        .build()
        .unwrap();

    for mut solver in SupportedSolver::all(&settings) {
        solver.solve(&tunnels);
        solver.report().unwrap();
    }
}
