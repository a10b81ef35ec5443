//! Breadth-first search: fewest steps, ignoring edge lengths.

use std::collections::VecDeque;

use crate::node::{GridNode, Node};
use crate::outcome::{Path, SearchOutcome};
use crate::policy::{GridPolicy, TraversalPolicy};
use crate::search::{Search, SearchBase};
use crate::state::SearchState;

/// Breadth-first search towards a fixed goal.
///
/// Finds a path with the fewest steps. Nodes are expanded in discovery
/// order from a FIFO queue; the f-score in [`SearchState`] records the step
/// count, while the g-score still accumulates [`Node::distance`] so the
/// returned [`Path::cost`] is the real length.
#[derive(Debug, Clone)]
pub struct BreadthFirst<N: Node, P> {
    base: SearchBase<N, P>,
    /// (node, g, depth) in discovery order.
    queue: VecDeque<(N, f64, f64)>,
}

impl<N: Node, P> BreadthFirst<N, P> {
    pub fn new(goal: N, policy: P) -> Self {
        Self {
            base: SearchBase::new(goal, policy),
            queue: VecDeque::new(),
        }
    }

    pub fn policy(&self) -> &P {
        &self.base.policy
    }
}

impl<N: GridNode> BreadthFirst<N, GridPolicy> {
    pub fn with_grid(goal: N) -> Self {
        Self::new(goal, GridPolicy)
    }
}

impl<N: Node, P: TraversalPolicy<N>> Search<N> for BreadthFirst<N, P> {
    fn find_nodes(&mut self, start: N) -> SearchOutcome<N> {
        self.reset();
        let base = &mut self.base;
        let queue = &mut self.queue;
        let goal = base.state.goal().clone();

        base.state.mark_open(start.clone(), 0.0, 0.0, None);
        queue.push_back((start, 0.0, 0.0));
        let mut nbuf = std::mem::take(&mut base.nbuf);

        let outcome = 'search: loop {
            let Some((current, g, depth)) = queue.pop_front() else {
                break 'search SearchOutcome::NoPath;
            };
            base.state.note_visit();
            if base.policy.on_visit(&base.state, &current) {
                break 'search SearchOutcome::Aborted { at: current };
            }
            if current == goal {
                let nodes = base.state.reconstruct(&current);
                break 'search SearchOutcome::Found(Path::new(nodes, g));
            }
            base.state.close(&current);

            nbuf.clear();
            base.policy.neighbors(&base.state, &current, &mut nbuf);

            for neighbor in nbuf.drain(..) {
                // The first discovery is already at minimal depth.
                if base.state.is_open(&neighbor) || base.state.is_closed(&neighbor) {
                    continue;
                }
                let ng = g + current.distance(&neighbor);
                base.state
                    .mark_open(neighbor.clone(), ng, depth + 1.0, Some(current.clone()));
                queue.push_back((neighbor, ng, depth + 1.0));
            }
        };

        base.nbuf = nbuf;
        base.finish("bfs", outcome)
    }

    fn reset(&mut self) {
        self.base.reset();
        self.queue.clear();
    }

    fn result(&self) -> Option<&Path<N>> {
        self.base.result.as_ref()
    }

    fn state(&self) -> &SearchState<N> {
        &self.base.state
    }
}
