//! Path reconstruction from predecessor maps

use itertools::Itertools;
use serde::Serialize;

use super::config::SearchConfig;
use super::dijkstra::{shortest_path_tree, single_source_shortest_paths};
use crate::{Cost, Error, Graph, NodeId, Predecessors};

/// A shortest path together with its total cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<N, W> {
    /// Nodes from source to destination, both included
    pub nodes: Vec<N>,
    pub cost: W,
}

impl<N, W> Route<N, W> {
    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

/// Walks predecessor links back from `destination` and returns the path in
/// source to destination order. The walk ends at the first node without a
/// predecessor, so `destination == source` yields `[source]`.
///
/// # Errors
///
/// [`Error::BrokenPredecessorChain`] if the chain is longer than the map
/// allows, which only happens when it loops.
pub fn extract_shortest_path_from_predecessor_list<N: NodeId>(
    predecessors: &Predecessors<N>,
    destination: &N,
) -> Result<Vec<N>, Error> {
    let max_len = predecessors.len() + 1;
    let mut nodes = Vec::new();

    let mut current = Some(destination);
    while let Some(node) = current {
        if nodes.len() == max_len {
            return Err(Error::BrokenPredecessorChain(format!("{destination:?}")));
        }
        nodes.push(node.clone());
        current = predecessors.get(node);
    }

    nodes.reverse();
    Ok(nodes)
}

/// Shortest path from `source` to `destination`
///
/// # Errors
///
/// Propagates errors of [`single_source_shortest_paths`] and
/// [`extract_shortest_path_from_predecessor_list`]
pub fn find_path<N: NodeId, W: Cost>(
    graph: &Graph<N, W>,
    source: &N,
    destination: &N,
) -> Result<Vec<N>, Error> {
    let predecessors = single_source_shortest_paths(graph, source, Some(destination))?;
    extract_shortest_path_from_predecessor_list(&predecessors, destination)
}

/// Shortest path with its cost, searched under `config`
pub fn find_route<N: NodeId, W: Cost>(
    graph: &Graph<N, W>,
    source: &N,
    destination: &N,
    config: &SearchConfig,
) -> Result<Route<N, W>, Error> {
    shortest_path_tree(graph, source, Some(destination), config)?.route_to(destination)
}

/// Sum of edge weights along `path`, `None` if it is empty, uses a
/// missing edge or overflows the weight type
pub fn path_cost<N: NodeId, W: Cost>(graph: &Graph<N, W>, path: &[N]) -> Option<W> {
    if path.is_empty() {
        return None;
    }
    path.iter()
        .tuple_windows()
        .try_fold(W::ZERO, |total, (from, to)| {
            graph
                .weight(from, to)
                .and_then(|weight| total.checked_add(*weight))
        })
}
