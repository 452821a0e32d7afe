use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use super::{finish_loading, open_file};
use crate::{Cost, Error, Graph, NodeId};

/// Parses a graph from its nested map form, `{"a": {"b": 1.0}}`
///
/// # Errors
///
/// Returns an error on malformed JSON or invalid edge weights
pub fn graph_from_json_str<N, W>(json: &str) -> Result<Graph<N, W>, Error>
where
    N: NodeId + DeserializeOwned,
    W: Cost + DeserializeOwned,
{
    let graph = serde_json::from_str(json)?;
    finish_loading(graph, "JSON string")
}

pub fn graph_from_json_reader<N, W, R>(reader: R) -> Result<Graph<N, W>, Error>
where
    N: NodeId + DeserializeOwned,
    W: Cost + DeserializeOwned,
    R: Read,
{
    let graph = serde_json::from_reader(BufReader::new(reader))?;
    finish_loading(graph, "JSON reader")
}

pub fn graph_from_json_file<N, W>(path: &Path) -> Result<Graph<N, W>, Error>
where
    N: NodeId + DeserializeOwned,
    W: Cost + DeserializeOwned,
{
    let graph = serde_json::from_reader(BufReader::new(open_file(path)?))?;
    finish_loading(graph, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_string_keys() {
        let graph: Graph<String, f64> =
            graph_from_json_str(r#"{"a": {"b": 10, "d": 1}, "b": {}}"#).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_load_from_reader() {
        let input = std::io::Cursor::new(r#"{"1": {"2": 3}}"#);
        let graph: Graph<u32, u32> = graph_from_json_reader(input).unwrap();

        assert_eq!(graph.weight(&1, &2), Some(&3));
    }

    #[test]
    fn test_negative_weight_fails_loading() {
        let result: Result<Graph<String, f64>, _> = graph_from_json_str(r#"{"a": {"b": -2.5}}"#);
        assert!(matches!(result, Err(Error::NegativeWeight { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result: Result<Graph<String, f64>, _> = graph_from_json_str(r#"{"a": ["b"]}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result: Result<Graph<String, f64>, _> =
            graph_from_json_file(Path::new("/nonexistent/graph.json"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
