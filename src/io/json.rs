use crate::algebra::*;
use crate::graph::Edge;
use crate::solver::SolverSettings;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// A tunnel network stored together with the settings to solve it with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound = "W: Serialize + DeserializeOwned")]
pub struct TunnelNetwork<W: WeightT> {
    pub edges: Vec<Edge<W>>,
    #[serde(default)]
    pub settings: SolverSettings,
}

/// Write a network and its solver settings to a file as JSON.
pub fn write_network_to_file<W>(
    file: &mut File,
    edges: &[Edge<W>],
    settings: &SolverSettings,
) -> Result<(), io::Error>
where
    W: WeightT + Serialize + DeserializeOwned,
{
    let network = TunnelNetwork {
        edges: edges.to_vec(),
        settings: settings.clone(),
    };

    let json = serde_json::to_string(&network)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

/// Read a network written by [`write_network_to_file`].  Settings are
/// validated after reading.
pub fn read_network_from_file<W>(file: &mut File) -> Result<TunnelNetwork<W>, io::Error>
where
    W: WeightT + Serialize + DeserializeOwned,
{
    let mut buffer = String::new();
    file.read_to_string(&mut buffer)?;
    let network: TunnelNetwork<W> = serde_json::from_str(&buffer)?;

    network
        .settings
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(network)
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let edges = vec![Edge::new(0, 1, 4u64), Edge::new(1, 2, 2), Edge::new(0, 2, 5)];
    let settings = crate::solver::SolverSettingsBuilder::default()
        .verbose(false)
        .station_prefix("E".to_string())
        .build()
        .unwrap();

    // write the network to a file
    let mut file = tempfile::tempfile().unwrap();
    write_network_to_file(&mut file, &edges, &settings).unwrap();

    // read the network from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let network = read_network_from_file::<u64>(&mut file).unwrap();
    assert_eq!(network.edges, edges);
    assert_eq!(network.settings, settings);
}

#[test]
fn test_json_rejects_bad_settings() {
    use std::io::{Seek, SeekFrom};

    let mut file = tempfile::tempfile().unwrap();
    let json = r#"{"edges":[{"origin":0,"destination":1,"weight":3}],"settings":{"station_prefix":""}}"#;
    file.write_all(json.as_bytes()).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = read_network_from_file::<u32>(&mut file).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
