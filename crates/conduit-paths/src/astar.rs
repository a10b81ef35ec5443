use crate::node::{GridNode, Node};
use crate::outcome::{Path, SearchOutcome};
use crate::policy::{GridPolicy, TraversalPolicy};
use crate::search::{Search, SearchBase};
use crate::state::SearchState;

/// A* search towards a fixed goal.
///
/// Edge costs and the heuristic both come from [`Node::distance`]. The
/// returned path is a shortest one as long as that distance never
/// overestimates the remaining cost; nodes are reopened when a cheaper route
/// to them turns up, so an inconsistent (but admissible) estimate is fine.
#[derive(Debug, Clone)]
pub struct AStar<N: Node, P> {
    base: SearchBase<N, P>,
}

impl<N: Node, P> AStar<N, P> {
    pub fn new(goal: N, policy: P) -> Self {
        Self {
            base: SearchBase::new(goal, policy),
        }
    }

    pub fn policy(&self) -> &P {
        &self.base.policy
    }

    pub fn into_policy(self) -> P {
        self.base.policy
    }
}

impl<N: GridNode> AStar<N, GridPolicy> {
    /// A* over an open grid with the default six-neighbor policy.
    pub fn with_grid(goal: N) -> Self {
        Self::new(goal, GridPolicy)
    }
}

impl<N: Node, P: TraversalPolicy<N>> Search<N> for AStar<N, P> {
    fn find_nodes(&mut self, start: N) -> SearchOutcome<N> {
        self.base.reset();
        let base = &mut self.base;
        let goal = base.state.goal().clone();

        let h = start.distance(&goal);
        base.state.open_node(start, 0.0, h, None);

        let mut nbuf = std::mem::take(&mut base.nbuf);

        let outcome = 'search: loop {
            let Some((current, current_g)) = base.state.pop_best() else {
                break 'search SearchOutcome::NoPath;
            };

            if base.policy.on_visit(&base.state, &current) {
                break 'search SearchOutcome::Aborted { at: current };
            }

            if current == goal {
                let nodes = base.state.reconstruct(&current);
                break 'search SearchOutcome::Found(Path::new(nodes, current_g));
            }

            base.state.close(&current);

            nbuf.clear();
            base.policy.neighbors(&base.state, &current, &mut nbuf);
            log::trace!("astar: expanding at g={current_g}, {} neighbors", nbuf.len());

            for neighbor in nbuf.drain(..) {
                let tentative_g = current_g + current.distance(&neighbor);
                let known_g = base.state.g_score(&neighbor);

                // No improvement over a finalized node.
                if base.state.is_closed(&neighbor) && known_g.is_some_and(|g| tentative_g >= g) {
                    continue;
                }

                if !base.state.is_open(&neighbor) || known_g.is_some_and(|g| tentative_g < g) {
                    let f = tentative_g + neighbor.distance(&goal);
                    base.state
                        .open_node(neighbor, tentative_g, f, Some(current.clone()));
                }
            }
        };

        base.nbuf = nbuf;
        base.finish("astar", outcome)
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
