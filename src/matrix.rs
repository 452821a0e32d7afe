use log::info;
use rayon::prelude::*;

use waypath_core::prelude::*;

/// Pairwise shortest path costs between `nodes`.
///
/// `matrix[i][j]` is the cost from `nodes[i]` to `nodes[j]`, `None` when
/// unreachable. One full search runs per row, rows in parallel.
///
/// # Errors
///
/// Fails if any search fails (e.g. on a negative edge weight)
pub fn cost_matrix<N, W>(graph: &Graph<N, W>, nodes: &[N]) -> Result<Vec<Vec<Option<W>>>, Error>
where
    N: NodeId + Send + Sync,
    W: Cost + Send + Sync,
{
    cost_matrix_with(graph, nodes, &SearchConfig::default())
}

pub fn cost_matrix_with<N, W>(
    graph: &Graph<N, W>,
    nodes: &[N],
    config: &SearchConfig,
) -> Result<Vec<Vec<Option<W>>>, Error>
where
    N: NodeId + Send + Sync,
    W: Cost + Send + Sync,
{
    info!("Computing {0}x{0} cost matrix", nodes.len());

    // Early exit would leave other row entries unsettled
    let config = config.with_stop_at_destination(false);

    nodes
        .par_iter()
        .map(|source| -> Result<Vec<Option<W>>, Error> {
            let tree = shortest_path_tree(graph, source, None, &config)?;
            Ok(nodes
                .iter()
                .map(|destination| tree.cost_to(destination))
                .collect())
        })
        .collect()
}
