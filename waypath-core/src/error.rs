use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find a path from {from} to {to}")]
    UnreachableDestination { from: String, to: String },
    #[error("Invalid edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },
    #[error("Path cost overflows on edge {from} -> {to}")]
    CostOverflow { from: String, to: String },
    #[error("Predecessor chain starting at {0} does not terminate")]
    BrokenPredecessorChain(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn unreachable<N: std::fmt::Debug>(from: &N, to: &N) -> Self {
        Error::UnreachableDestination {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn cost_overflow<N: std::fmt::Debug>(from: &N, to: &N) -> Self {
        Error::CostOverflow {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn negative_weight<N, W>(from: &N, to: &N, weight: W) -> Self
    where
        N: std::fmt::Debug,
        W: std::fmt::Debug,
    {
        Error::NegativeWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight: format!("{weight:?}"),
        }
    }
}
