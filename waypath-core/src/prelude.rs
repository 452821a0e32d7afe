// Re-export key components
pub use crate::loading::{
    graph_from_csv_file, graph_from_csv_reader, graph_from_json_file, graph_from_json_reader,
    graph_from_json_str,
};
pub use crate::model::{Cost, Graph, NodeId};
pub use crate::routing::{
    Route, SearchConfig, SearchStats, ShortestPathTree,
    extract_shortest_path_from_predecessor_list, find_path, find_route, path_cost,
    shortest_path_tree, single_source_shortest_paths,
};

// Queue types, for callers driving their own searches
pub use crate::routing::{PriorityQueue, QueueStrategy};

pub use crate::Error;
pub use crate::{Costs, Predecessors};
