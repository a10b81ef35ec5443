use conduit_core::{Pos3, Region};

/// Errors raised before a search starts.
///
/// Running out of nodes and being vetoed by the policy are not errors; they
/// are reported through [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A start or goal node the caller's space does not accept.
    #[error("invalid {role} node {pos}: {reason}")]
    InvalidInput {
        role: Endpoint,
        pos: Pos3,
        reason: String,
    },
}

impl SearchError {
    pub(crate) fn out_of_region(role: Endpoint, pos: Pos3, region: Region) -> Self {
        SearchError::InvalidInput {
            role,
            pos,
            reason: format!("outside of {region}"),
        }
    }
}

/// Which end of a search a node was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}
