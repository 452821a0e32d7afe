use serde::{Deserialize, Serialize};

use super::queue::QueueStrategy;

/// Knobs for a single search.
///
/// Deserializes from partial input; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Backing data structure of the priority queue
    pub queue: QueueStrategy,
    /// Skip queue entries superseded by a cheaper push for the same node
    pub skip_stale: bool,
    /// Fail on negative or `NaN` weights of relaxed edges.
    /// Without it such weights give wrong costs, and a negative cycle
    /// reachable from the source keeps the search from terminating.
    pub validate_weights: bool,
    /// Stop as soon as the destination is settled
    pub stop_at_destination: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            queue: QueueStrategy::BinaryHeap,
            skip_stale: true,
            validate_weights: true,
            stop_at_destination: false,
        }
    }
}

impl SearchConfig {
    pub fn with_queue(mut self, queue: QueueStrategy) -> Self {
        self.queue = queue;
        self
    }

    pub fn with_skip_stale(mut self, skip: bool) -> Self {
        self.skip_stale = skip;
        self
    }

    pub fn with_validate_weights(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }

    pub fn with_stop_at_destination(mut self, stop: bool) -> Self {
        self.stop_at_destination = stop;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"queue": "sorted_vec"}"#).unwrap();

        assert_eq!(config.queue, QueueStrategy::SortedVec);
        assert!(config.skip_stale);
        assert!(config.validate_weights);
        assert!(!config.stop_at_destination);
    }
}
