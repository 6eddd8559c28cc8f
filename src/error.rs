use thiserror::Error;

pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Everything that can go wrong while building a graph, its spanning tree, or a tour.
///
/// Node identifiers are rendered with their [std::fmt::Display] impl so the error
/// stays independent of the node type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("invalid edge ({from}, {to}): {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: &'static str,
    },
    #[error("invalid weight {weight} on edge ({from}, {to}): weights must be finite and non-negative")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("edge ({from}, {to}) already has weight {existing}, refusing to set it to {requested}")]
    InvalidWeightConflict {
        from: String,
        to: String,
        existing: f64,
        requested: f64,
    },
    #[error("no weight for edge ({from}, {to})")]
    EdgeNotFound { from: String, to: String },
    #[error("node {0} is not in the graph")]
    NodeNotFound(String),
    #[error("graph is not connected ({components} components)")]
    GraphNotConnected { components: usize },
}

impl GraphError {
    pub(crate) fn edge_not_found(from: impl ToString, to: impl ToString) -> Self {
        Self::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
