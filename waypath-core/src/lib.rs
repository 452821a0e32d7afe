//! Single-source shortest paths over weighted directed graphs.
//!
//! The crate is built around Dijkstra's algorithm: a relaxation loop
//! driven by a min-priority queue produces a predecessor map, and paths
//! are read back from that map.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{Cost, Graph, NodeId};
pub use routing::{
    PriorityQueue, QueueStrategy, Route, SearchConfig, SearchStats, ShortestPathTree,
    extract_shortest_path_from_predecessor_list, find_path, find_route, path_cost,
    shortest_path_tree, single_source_shortest_paths,
};

/// Node to node predecessor links produced by a search
pub type Predecessors<N> = hashbrown::HashMap<N, N>;

/// Best known cost from the source for every reached node
pub type Costs<N, W> = hashbrown::HashMap<N, W>;
