use crate::node::{GridNode, Node};
use crate::state::SearchState;

/// Caller-supplied traversal rules for a search.
///
/// Methods take `&self` so one policy can drive several searches; a policy
/// shared between threads must be `Sync`.
pub trait TraversalPolicy<N: Node> {
    /// Called once for every node taken from the frontier, before the goal
    /// check. Returning `true` vetoes the search, which then ends as
    /// [`SearchOutcome::Aborted`](crate::SearchOutcome::Aborted).
    fn on_visit(&self, _search: &SearchState<N>, _node: &N) -> bool {
        false
    }

    /// Append every node reachable from `node` in one step into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, search: &SearchState<N>, node: &N, buf: &mut Vec<N>);
}

impl<N: Node, P: TraversalPolicy<N> + ?Sized> TraversalPolicy<N> for &P {
    #[inline]
    fn on_visit(&self, search: &SearchState<N>, node: &N) -> bool {
        (**self).on_visit(search, node)
    }

    #[inline]
    fn neighbors(&self, search: &SearchState<N>, node: &N, buf: &mut Vec<N>) {
        (**self).neighbors(search, node, buf)
    }
}

/// Fallback policy for open 3D grids: the six axis-aligned neighbors, no veto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridPolicy;

impl<N: GridNode> TraversalPolicy<N> for GridPolicy {
    fn neighbors(&self, _search: &SearchState<N>, node: &N, buf: &mut Vec<N>) {
        node.axis_neighbors(buf);
    }
}

/// Policy built from closures.
///
/// ```
/// use conduit_core::Pos3;
/// use conduit_paths::{AStar, FnPolicy, Search};
///
/// // A corridor along X, vetoing anything past x = 10.
/// let policy = FnPolicy::new(|p: &Pos3, buf: &mut Vec<Pos3>| {
///     buf.push(p.shift(1, 0, 0));
///     buf.push(p.shift(-1, 0, 0));
/// })
/// .with_veto(|p: &Pos3| p.x > 10);
///
/// let mut search = AStar::new(Pos3::new(4, 0, 0), policy);
/// assert!(search.find_nodes(Pos3::ZERO).is_found());
/// ```
#[derive(Clone, Copy)]
pub struct FnPolicy<F, V> {
    neighbors: F,
    veto: V,
}

fn never<N>(_: &N) -> bool {
    false
}

impl<F> FnPolicy<F, ()> {
    /// Policy enumerating neighbors with `neighbors`, never vetoing.
    pub fn new<N>(neighbors: F) -> FnPolicy<F, fn(&N) -> bool>
    where
        F: Fn(&N, &mut Vec<N>),
    {
        FnPolicy {
            neighbors,
            veto: never::<N>,
        }
    }
}

impl<F, V> FnPolicy<F, V> {
    /// Replace the veto predicate.
    pub fn with_veto<N, V2>(self, veto: V2) -> FnPolicy<F, V2>
    where
        V2: Fn(&N) -> bool,
    {
        FnPolicy {
            neighbors: self.neighbors,
            veto,
        }
    }
}

impl<N, F, V> TraversalPolicy<N> for FnPolicy<F, V>
where
    N: Node,
    F: Fn(&N, &mut Vec<N>),
    V: Fn(&N) -> bool,
{
    #[inline]
    fn on_visit(&self, _search: &SearchState<N>, node: &N) -> bool {
        (self.veto)(node)
    }

    #[inline]
    fn neighbors(&self, _search: &SearchState<N>, node: &N, buf: &mut Vec<N>) {
        (self.neighbors)(node, buf)
    }
}

impl<F, V> std::fmt::Debug for FnPolicy<F, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPolicy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conduit_core::Pos3;

    #[test]
    fn grid_policy_yields_six_neighbors() {
        let st = SearchState::new(Pos3::ZERO);
        let mut buf = Vec::new();
        GridPolicy.neighbors(&st, &Pos3::new(1, 1, 1), &mut buf);
        assert_eq!(buf.len(), 6);
        assert!(buf.contains(&Pos3::new(1, 0, 1)));
        assert!(buf.contains(&Pos3::new(2, 1, 1)));
        assert!(!GridPolicy.on_visit(&st, &Pos3::ZERO));
    }

    #[test]
    fn fn_policy_veto_and_reference() {
        let st = SearchState::new(Pos3::ZERO);
        let policy = FnPolicy::new(|p: &Pos3, buf: &mut Vec<Pos3>| buf.push(p.shift(0, 0, 1)))
            .with_veto(|p: &Pos3| p.z >= 3);
        let by_ref = &policy;
        assert!(!by_ref.on_visit(&st, &Pos3::new(0, 0, 2)));
        assert!(by_ref.on_visit(&st, &Pos3::new(0, 0, 3)));

        let mut buf = Vec::new();
        by_ref.neighbors(&st, &Pos3::ZERO, &mut buf);
        assert_eq!(buf, vec![Pos3::new(0, 0, 1)]);
    }

    #[test]
    fn fn_policy_without_veto_never_vetoes() {
        let st = SearchState::new(Pos3::ZERO);
        let policy = FnPolicy::new(|_: &Pos3, _: &mut Vec<Pos3>| {});
        assert!(!policy.on_visit(&st, &Pos3::new(100, 0, 0)));
    }
}
