use log::debug;
use rayon::prelude::*;

use waypath_core::prelude::*;

/// Runs [`find_path`] for every `(source, destination)` query in parallel.
/// Results are returned in query order; a failed query does not affect the others.
pub fn find_paths<N, W>(graph: &Graph<N, W>, queries: &[(N, N)]) -> Vec<Result<Vec<N>, Error>>
where
    N: NodeId + Send + Sync,
    W: Cost + Send + Sync,
{
    debug!("Running {} path queries", queries.len());

    queries
        .par_iter()
        .map(|(source, destination)| find_path(graph, source, destination))
        .collect()
}

/// Like [`find_paths`], returning costs as well and searching under `config`
pub fn find_routes<N, W>(
    graph: &Graph<N, W>,
    queries: &[(N, N)],
    config: &SearchConfig,
) -> Vec<Result<Route<N, W>, Error>>
where
    N: NodeId + Send + Sync,
    W: Cost + Send + Sync,
{
    debug!("Running {} route queries", queries.len());

    queries
        .par_iter()
        .map(|(source, destination)| find_route(graph, source, destination, config))
        .collect()
}
