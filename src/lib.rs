//! Shortest paths over weighted directed graphs.
//!
//! Re-exports [`waypath_core`] and adds batch operations that run many
//! independent searches in parallel over one shared, read-only graph.

pub mod batch;
pub mod matrix;

pub use waypath_core::prelude::*;
pub use waypath_core::{loading, model, prelude, routing};

pub use batch::{find_paths, find_routes};
pub use matrix::{cost_matrix, cost_matrix_with};
