// Dijkstra search, its priority queue and path reconstruction

mod config;
pub mod dijkstra;
pub mod path;
pub mod queue;

pub use config::SearchConfig;
pub use dijkstra::{
    SearchStats, ShortestPathTree, shortest_path_tree, single_source_shortest_paths,
};
pub use path::{Route, extract_shortest_path_from_predecessor_list, find_path, find_route, path_cost};
pub use queue::{PriorityQueue, QueueStrategy};
