use std::cmp::Ordering;

/// Queue entry: a node and the cumulative cost it was pushed with.
/// `seq` is the push counter of the owning queue.
#[derive(Clone, Debug)]
pub(super) struct State<N, W> {
    pub(super) cost: W,
    pub(super) seq: u64,
    pub(super) node: N,
}

// Implement Ord for State to use in BinaryHeap
impl<N, W: PartialOrd> Ord for State<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // then first-in first-out among equal costs
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N, W: PartialOrd> PartialOrd for State<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: PartialOrd> PartialEq for State<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W: PartialOrd> Eq for State<N, W> {}
