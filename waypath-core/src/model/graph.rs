//! Weighted directed graph stored as an adjacency mapping

use std::hash::Hash;

use hashbrown::HashMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Cost, NodeId};
use crate::Error;

/// Mapping from a node to its outgoing edges (neighbor -> weight).
///
/// Neighbors keep insertion order, which makes searches reproducible.
/// Nodes that never appear as keys simply have no outgoing edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(
        serialize = "N: Serialize + Eq + Hash, W: Serialize",
        deserialize = "N: Deserialize<'de> + Eq + Hash, W: Deserialize<'de>"
    )
)]
pub struct Graph<N, W> {
    adjacency: HashMap<N, IndexMap<N, W>>,
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<N: Eq + Hash, W> Graph<N, W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Registers a node without outgoing edges (no-op if already present)
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds the edge `from -> to`, returning the previous weight if the
    /// edge already existed.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> Option<W> {
        self.adjacency.entry(from).or_default().insert(to, weight)
    }

    /// Outgoing edges of `node`, `None` if it has no adjacency entry
    pub fn adjacent(&self, node: &N) -> Option<&IndexMap<N, W>> {
        self.adjacency.get(node)
    }

    pub fn weight(&self, from: &N, to: &N) -> Option<&W> {
        self.adjacency.get(from).and_then(|adjacent| adjacent.get(to))
    }

    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        self.weight(from, to).is_some()
    }

    /// Whether `node` appears anywhere in the graph, as a key or as a neighbor
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
            || self
                .adjacency
                .values()
                .any(|adjacent| adjacent.contains_key(node))
    }

    /// Number of nodes with an adjacency entry
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &W)> {
        self.adjacency
            .iter()
            .flat_map(|(from, adjacent)| adjacent.iter().map(move |(to, w)| (from, to, w)))
    }
}

impl<N: NodeId, W: Cost> Graph<N, W> {
    /// Checks that every edge weight is usable by Dijkstra's algorithm
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeWeight`] for the first negative or `NaN` weight found
    pub fn validate(&self) -> Result<(), Error> {
        for (from, to, weight) in self.edges() {
            if weight.is_invalid_weight() {
                return Err(Error::negative_weight(from, to, *weight));
            }
        }
        Ok(())
    }
}

impl<N: Eq + Hash, W> FromIterator<(N, N, W)> for Graph<N, W> {
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<N: Eq + Hash, W> Extend<(N, N, W)> for Graph<N, W> {
    fn extend<I: IntoIterator<Item = (N, N, W)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.add_edge(from, to, weight);
        }
    }
}

impl<N, W> From<HashMap<N, IndexMap<N, W>>> for Graph<N, W> {
    fn from(adjacency: HashMap<N, IndexMap<N, W>>) -> Self {
        Self { adjacency }
    }
}
