//! Data model for shortest path searches
//!
//! Contains the graph representation and the traits node identifiers and
//! edge weights have to satisfy.

pub mod cost;
pub mod graph;

pub use cost::Cost;
pub use graph::Graph;

use std::fmt::Debug;
use std::hash::Hash;

/// Anything usable as a node identifier.
///
/// Equality defines node identity. `Debug` is used to render nodes in
/// error messages.
pub trait NodeId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> NodeId for T {}
