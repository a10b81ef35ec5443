//! Visit and time limits, enforced through the policy veto.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::node::Node;
use crate::policy::TraversalPolicy;
use crate::state::SearchState;

/// Wraps a policy and vetoes the search once a limit is hit.
///
/// The visit counter is shared by every search the budget is used with, so a
/// single `Budget` (behind a reference) caps the total work of several
/// searches, across threads if need be. Call [`rearm`](Self::rearm) to reset.
#[derive(Debug)]
pub struct Budget<P> {
    inner: P,
    max_visits: Option<usize>,
    deadline: Option<Instant>,
    visits: AtomicUsize,
}

impl<P> Budget<P> {
    /// A budget with no limits yet.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            max_visits: None,
            deadline: None,
            visits: AtomicUsize::new(0),
        }
    }

    /// Allow at most `n` visits; the next one is vetoed.
    pub fn max_visits(mut self, n: usize) -> Self {
        self.max_visits = Some(n);
        self
    }

    /// Veto every visit made after `deadline`.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Veto every visit made once `limit` has elapsed from now. A limit too
    /// far out to represent as an [`Instant`] sets no deadline.
    pub fn time_limit(self, limit: Duration) -> Self {
        match Instant::now().checked_add(limit) {
            Some(deadline) => self.deadline(deadline),
            None => self,
        }
    }

    /// Visits counted so far.
    pub fn visits(&self) -> usize {
        self.visits.load(Ordering::Relaxed)
    }

    /// Reset the visit counter.
    pub fn rearm(&self) {
        self.visits.store(0, Ordering::Relaxed);
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<N: Node, P: TraversalPolicy<N>> TraversalPolicy<N> for Budget<P> {
    fn on_visit(&self, search: &SearchState<N>, node: &N) -> bool {
        let n = self.visits.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(max) = self.max_visits {
            if n > max {
                log::debug!("budget: visit limit {max} exhausted");
                return true;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                log::debug!("budget: deadline passed after {n} visits");
                return true;
            }
        }
        self.inner.on_visit(search, node)
    }

    #[inline]
    fn neighbors(&self, search: &SearchState<N>, node: &N, buf: &mut Vec<N>) {
        self.inner.neighbors(search, node, buf)
    }
}
