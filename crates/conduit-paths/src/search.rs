use crate::node::Node;
use crate::outcome::{Path, SearchOutcome};
use crate::state::SearchState;

/// Shared contract of every search strategy.
///
/// A search is built for one goal and one traversal policy. Each
/// [`find_nodes`](Self::find_nodes) call starts over from a clean state, so an
/// instance can be reused for several starts towards the same goal.
pub trait Search<N: Node> {
    /// Run the search from `start` towards the goal.
    fn find_nodes(&mut self, start: N) -> SearchOutcome<N>;

    /// Forget all bookkeeping and the last result.
    fn reset(&mut self);

    /// Path found by the last successful search, if any.
    fn result(&self) -> Option<&Path<N>>;

    /// Bookkeeping of the last (or current) search.
    fn state(&self) -> &SearchState<N>;

    /// The node this search is trying to reach.
    fn goal(&self) -> &N {
        self.state().goal()
    }
}

/// State lifecycle shared by the strategies: bookkeeping, the policy, the
/// stored result and a neighbor scratch buffer.
#[derive(Debug, Clone)]
pub(crate) struct SearchBase<N: Node, P> {
    pub(crate) state: SearchState<N>,
    pub(crate) policy: P,
    pub(crate) result: Option<Path<N>>,
    pub(crate) nbuf: Vec<N>,
}

impl<N: Node, P> SearchBase<N, P> {
    pub(crate) fn new(goal: N, policy: P) -> Self {
        Self {
            state: SearchState::new(goal),
            policy,
            result: None,
            nbuf: Vec::with_capacity(6),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.state.clear();
        self.result = None;
    }

    /// Store the result of a finished search and log a summary.
    pub(crate) fn finish(&mut self, strategy: &str, outcome: SearchOutcome<N>) -> SearchOutcome<N> {
        let kind = match &outcome {
            SearchOutcome::Found(_) => "found",
            SearchOutcome::NoPath => "no path",
            SearchOutcome::Aborted { .. } => "aborted",
        };
        log::debug!(
            "{strategy}: {kind} after {} visits (open {}, closed {})",
            self.state.visits(),
            self.state.open_len(),
            self.state.closed_len(),
        );
        self.result = outcome.path().cloned();
        outcome
    }
}
