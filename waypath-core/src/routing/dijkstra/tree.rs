use crate::routing::path::{Route, extract_shortest_path_from_predecessor_list};
use crate::{Cost, Costs, Error, NodeId, Predecessors};

/// Counters collected while running a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the queue, including the source
    pub pushes: usize,
    /// Entries popped from the queue
    pub pops: usize,
    /// Pops discarded because a cheaper entry for the node was already processed
    pub stale_skipped: usize,
    /// Successful relaxations (cost and predecessor updates)
    pub relaxations: usize,
}

/// Everything one search learned about the graph from its source.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N, W> {
    pub(super) source: N,
    pub(super) predecessors: Predecessors<N>,
    pub(super) costs: Costs<N, W>,
    pub(super) stats: SearchStats,
}

impl<N: NodeId, W: Cost> ShortestPathTree<N, W> {
    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn predecessors(&self) -> &Predecessors<N> {
        &self.predecessors
    }

    pub fn into_predecessors(self) -> Predecessors<N> {
        self.predecessors
    }

    pub fn costs(&self) -> &Costs<N, W> {
        &self.costs
    }

    /// Cost of the best path from the source to `node`, if it was reached
    pub fn cost_to(&self, node: &N) -> Option<W> {
        self.costs.get(node).copied()
    }

    pub fn is_reached(&self, node: &N) -> bool {
        self.costs.contains_key(node)
    }

    /// Reached nodes with their costs, the source included
    pub fn reached(&self) -> impl Iterator<Item = (&N, W)> {
        self.costs.iter().map(|(node, cost)| (node, *cost))
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Nodes of the best path from the source to `destination`
    ///
    /// # Errors
    ///
    /// [`Error::UnreachableDestination`] if the search never reached `destination`
    pub fn path_to(&self, destination: &N) -> Result<Vec<N>, Error> {
        if !self.is_reached(destination) {
            return Err(Error::unreachable(&self.source, destination));
        }
        extract_shortest_path_from_predecessor_list(&self.predecessors, destination)
    }

    /// Like [`ShortestPathTree::path_to`], with the total cost attached
    pub fn route_to(&self, destination: &N) -> Result<Route<N, W>, Error> {
        let nodes = self.path_to(destination)?;
        let cost = self
            .cost_to(destination)
            .ok_or_else(|| Error::unreachable(&self.source, destination))?;
        Ok(Route { nodes, cost })
    }
}
