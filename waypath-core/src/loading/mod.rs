//! This module is responsible for building graphs from serialized input
//! (nested JSON maps or CSV edge lists).
//!
//! Every loader validates edge weights before handing the graph out.

mod edge_list;
mod json;

pub use edge_list::{EdgeRecord, graph_from_csv_file, graph_from_csv_reader};
pub use json::{graph_from_json_file, graph_from_json_reader, graph_from_json_str};

use log::info;

use crate::{Cost, Error, Graph, NodeId};

fn finish_loading<N: NodeId, W: Cost>(
    graph: Graph<N, W>,
    origin: &str,
) -> Result<Graph<N, W>, Error> {
    graph.validate()?;
    info!(
        "Loaded graph from {origin}: {} nodes with outgoing edges, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn open_file(path: &std::path::Path) -> Result<std::fs::File, Error> {
    std::fs::File::open(path).map_err(|e| {
        Error::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        ))
    })
}
