use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{finish_loading, open_file};
use crate::{Cost, Error, Graph, NodeId};

/// One row of an edge list file with a `from,to,weight` header
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord<N, W> {
    pub from: N,
    pub to: N,
    pub weight: W,
}

/// Builds a graph from CSV edge list rows. Repeated edges keep the last weight.
///
/// # Errors
///
/// Returns an error on the first malformed row or on invalid edge weights
pub fn graph_from_csv_reader<N, W, R>(reader: R) -> Result<Graph<N, W>, Error>
where
    N: NodeId + DeserializeOwned,
    W: Cost + DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = Graph::new();
    for record in csv_reader.deserialize::<EdgeRecord<N, W>>() {
        let EdgeRecord { from, to, weight } = record?;
        graph.add_edge(from, to, weight);
    }

    finish_loading(graph, "CSV reader")
}

pub fn graph_from_csv_file<N, W>(path: &Path) -> Result<Graph<N, W>, Error>
where
    N: NodeId + DeserializeOwned,
    W: Cost + DeserializeOwned,
{
    graph_from_csv_reader(open_file(path)?)
}
