mod tree;

pub use tree::{SearchStats, ShortestPathTree};

use log::{debug, trace};

use super::config::SearchConfig;
use super::queue::PriorityQueue;
use crate::{Cost, Costs, Error, Graph, NodeId, Predecessors};

/// Dijkstra's algorithm from `source` over the whole reachable graph
/// Returns the predecessor of every reached node except the source
///
/// # Errors
///
/// [`Error::UnreachableDestination`] if `destination` is given and no path to it exists,
/// [`Error::NegativeWeight`] if a relaxed edge carries a negative weight,
/// [`Error::CostOverflow`] if a path cost does not fit the weight type
pub fn single_source_shortest_paths<N: NodeId, W: Cost>(
    graph: &Graph<N, W>,
    source: &N,
    destination: Option<&N>,
) -> Result<Predecessors<N>, Error> {
    shortest_path_tree(graph, source, destination, &SearchConfig::default())
        .map(ShortestPathTree::into_predecessors)
}

/// Configurable form of [`single_source_shortest_paths`], keeping costs and counters
///
/// # Errors
///
/// Same as [`single_source_shortest_paths`]; weight checks only run with
/// [`SearchConfig::validate_weights`] set.
pub fn shortest_path_tree<N: NodeId, W: Cost>(
    graph: &Graph<N, W>,
    source: &N,
    destination: Option<&N>,
    config: &SearchConfig,
) -> Result<ShortestPathTree<N, W>, Error> {
    let estimated_nodes = graph.node_count().min(1024);
    let mut costs: Costs<N, W> = Costs::with_capacity(estimated_nodes);
    let mut predecessors: Predecessors<N> = Predecessors::with_capacity(estimated_nodes);
    let mut open = PriorityQueue::with_capacity(config.queue, estimated_nodes / 4);
    let mut stats = SearchStats::default();

    costs.insert(source.clone(), W::ZERO);
    open.push(source.clone(), W::ZERO);
    stats.pushes += 1;

    while let Some((node, cost)) = open.pop() {
        stats.pops += 1;

        // A cheaper entry for this node was already processed
        if config.skip_stale {
            if let Some(&best) = costs.get(&node) {
                if cost > best {
                    trace!("Skipping stale entry {node:?} ({cost:?} > {best:?})");
                    stats.stale_skipped += 1;
                    continue;
                }
            }
        }

        if config.stop_at_destination && destination == Some(&node) {
            break;
        }

        let Some(adjacent) = graph.adjacent(&node) else {
            continue;
        };

        for (next, &weight) in adjacent {
            if config.validate_weights && weight.is_invalid_weight() {
                return Err(Error::negative_weight(&node, next, weight));
            }

            let Some(next_cost) = cost.checked_add(weight) else {
                return Err(Error::cost_overflow(&node, next));
            };
            let improved = match costs.get_mut(next) {
                Some(best) if next_cost < *best => {
                    *best = next_cost;
                    true
                }
                Some(_) => false,
                None => {
                    costs.insert(next.clone(), next_cost);
                    true
                }
            };

            if improved {
                predecessors.insert(next.clone(), node.clone());
                open.push(next.clone(), next_cost);
                stats.relaxations += 1;
                stats.pushes += 1;
            }
        }
    }

    if let Some(target) = destination {
        if !costs.contains_key(target) {
            return Err(Error::unreachable(source, target));
        }
    }

    debug!(
        "Search from {source:?} reached {} nodes ({} pushes, {} pops, {} stale, {} relaxations)",
        costs.len(),
        stats.pushes,
        stats.pops,
        stats.stale_skipped,
        stats.relaxations
    );

    Ok(ShortestPathTree {
        source: source.clone(),
        predecessors,
        costs,
        stats,
    })
}
