//! Greedy best-first search.

use crate::node::{GridNode, Node};
use crate::outcome::{Path, SearchOutcome};
use crate::policy::{GridPolicy, TraversalPolicy};
use crate::search::{Search, SearchBase};
use crate::state::SearchState;

/// Always expands the node that looks closest to the goal.
///
/// Usually visits far fewer nodes than [`AStar`](crate::AStar) in open
/// space, but the path it returns is not guaranteed to be the shortest.
/// Nodes are never reopened.
#[derive(Debug, Clone)]
pub struct GreedyBestFirst<N: Node, P> {
    base: SearchBase<N, P>,
}

impl<N: Node, P> GreedyBestFirst<N, P> {
    pub fn new(goal: N, policy: P) -> Self {
        Self {
            base: SearchBase::new(goal, policy),
        }
    }

    pub fn policy(&self) -> &P {
        &self.base.policy
    }
}

impl<N: GridNode> GreedyBestFirst<N, GridPolicy> {
    pub fn with_grid(goal: N) -> Self {
        Self::new(goal, GridPolicy)
    }
}

impl<N: Node, P: TraversalPolicy<N>> Search<N> for GreedyBestFirst<N, P> {
    fn find_nodes(&mut self, start: N) -> SearchOutcome<N> {
        self.base.reset();
        let base = &mut self.base;
        let goal = base.state.goal().clone();

        let h = start.distance(&goal);
        base.state.open_node(start, 0.0, h, None);
        let mut nbuf = std::mem::take(&mut base.nbuf);

        let outcome = 'search: loop {
            let Some((current, g)) = base.state.pop_best() else {
                break 'search SearchOutcome::NoPath;
            };
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
                if base.state.is_open(&neighbor) || base.state.is_closed(&neighbor) {
                    continue;
                }
                let ng = g + current.distance(&neighbor);
                let h = neighbor.distance(&goal);
                base.state.open_node(neighbor, ng, h, Some(current.clone()));
            }
        };

        base.nbuf = nbuf;
        base.finish("greedy", outcome)
    }

    fn reset(&mut self) {
        self.base.reset();
    }

    fn result(&self) -> Option<&Path<N>> {
        self.base.result.as_ref()
    }

    fn state(&self) -> &SearchState<N> {
        &self.base.state
    }
}
