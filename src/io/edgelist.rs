use crate::algebra::*;
use crate::graph::{Edge, StationId};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Field separator of the edge list format.
pub const EDGE_LIST_SEPARATOR: char = ';';

/// Error type returned when reading an edge list.
#[derive(Error, Debug)]
pub enum EdgeListError {
    /// The underlying reader failed
    #[error("I/O error reading edge list")]
    Io(#[from] std::io::Error),
    /// A line has fewer than three fields
    #[error("line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },
    /// A station field is not a prefixed integer
    #[error("line {line}: bad station \"{value}\"")]
    BadStation { line: usize, value: String },
    /// The weight field could not be parsed
    #[error("line {line}: bad weight \"{value}\"")]
    BadWeight { line: usize, value: String },
}

/// Read an edge list, one tunnel per line.
///
/// Each line holds `origin;destination;weight`.  Station fields carry a
/// single non-digit prefix character (e.g. `E12`) which is stripped before
/// the id is parsed.  Fields are trimmed and blank lines are skipped.
/// Fields beyond the third are ignored.
pub fn read_edge_list<W, R>(reader: R) -> Result<Vec<Edge<W>>, EdgeListError>
where
    W: WeightT,
    R: BufRead,
{
    let mut edges = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(EDGE_LIST_SEPARATOR).map(str::trim);
        let mut next_field = |field: &'static str| {
            fields.next().ok_or(EdgeListError::MissingField {
                line: lineno,
                field,
            })
        };
        let origin = next_field("origin")?;
        let destination = next_field("destination")?;
        let weight = next_field("weight")?;

        let origin = parse_station(origin, lineno)?;
        let destination = parse_station(destination, lineno)?;
        let weight = weight.parse::<W>().map_err(|_| EdgeListError::BadWeight {
            line: lineno,
            value: weight.to_string(),
        })?;

        edges.push(Edge::new(origin, destination, weight));
    }

    Ok(edges)
}

/// Read an edge list from a file.  See [`read_edge_list`].
pub fn read_edge_list_from_path<W, P>(path: P) -> Result<Vec<Edge<W>>, EdgeListError>
where
    W: WeightT,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read_edge_list(BufReader::new(file))
}

fn parse_station(field: &str, line: usize) -> Result<StationId, EdgeListError> {
    let bad = || EdgeListError::BadStation {
        line,
        value: field.to_string(),
    };

    let mut chars = field.chars();
    match chars.next() {
        Some(c) if !c.is_ascii_digit() => chars.as_str().parse().map_err(|_| bad()),
        _ => Err(bad()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_edge_list() {
        let text = "E1;E2;40\n E2 ; E3 ; 7 \n\nE10;E1;3\n";
        let edges: Vec<Edge<u32>> = read_edge_list(text.as_bytes()).unwrap();
        assert_eq!(
            edges,
            vec![
                Edge::new(1, 2, 40),
                Edge::new(2, 3, 7),
                Edge::new(10, 1, 3)
            ]
        );
    }

    #[test]
    fn test_missing_field() {
        let err = read_edge_list::<u32, _>("E1;E2;4\nE1;E2\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            EdgeListError::MissingField {
                line: 2,
                field: "weight"
            }
        ));
    }

    #[test]
    fn test_bad_station() {
        // prefix is required
        let err = read_edge_list::<u32, _>("12;E2;4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, EdgeListError::BadStation { line: 1, .. }));

        let err = read_edge_list::<u32, _>("E1;Ex;4\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 1: bad station \"Ex\"");
    }

    #[test]
    fn test_bad_weight() {
        let err = read_edge_list::<u32, _>("E1;E2;-4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, EdgeListError::BadWeight { line: 1, .. }));

        // signed weights parse fine
        let edges = read_edge_list::<i64, _>("E1;E2;-4\n".as_bytes()).unwrap();
        assert_eq!(edges[0].weight, -4);
    }
}
