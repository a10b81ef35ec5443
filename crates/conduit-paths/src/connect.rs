//! Policies for networks of connectable cells (cables, pipes, ducts).
//!
//! The world decides, per cell and per face, whether the cell links to its
//! neighbor on that face. [`ConnectedPolicy`] turns that into a traversal
//! policy, optionally clamped to a [`Region`].

use std::collections::HashSet;

use conduit_core::{Facing, Pos3, Region};

use crate::error::{Endpoint, SearchError};
use crate::policy::TraversalPolicy;
use crate::state::SearchState;

/// Something that knows which faces of a cell connect onwards.
pub trait Connectable {
    /// Whether the cell at `pos` links to its neighbor on `side`.
    fn can_connect(&self, pos: Pos3, side: Facing) -> bool;
}

impl<F: Fn(Pos3, Facing) -> bool> Connectable for F {
    #[inline]
    fn can_connect(&self, pos: Pos3, side: Facing) -> bool {
        self(pos, side)
    }
}

/// A plain set of occupied cells: adjacent occupied cells connect.
impl Connectable for HashSet<Pos3> {
    #[inline]
    fn can_connect(&self, pos: Pos3, side: Facing) -> bool {
        self.contains(&pos) && pos.checked_offset(side).is_some_and(|n| self.contains(&n))
    }
}

/// Traversal over the links a [`Connectable`] world reports.
#[derive(Debug, Clone)]
pub struct ConnectedPolicy<W> {
    world: W,
    bounds: Option<Region>,
    strict: bool,
}

impl<W: Connectable> ConnectedPolicy<W> {
    pub fn new(world: W) -> Self {
        Self {
            world,
            bounds: None,
            strict: false,
        }
    }

    /// Never step outside `region`, and veto any visit outside it.
    pub fn bounded(mut self, region: Region) -> Self {
        self.bounds = Some(region);
        self
    }

    /// Require both cells to agree on a link, not only the one being left.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Check that both endpoints lie inside the bounds, if any.
    pub fn check_endpoints(&self, start: Pos3, goal: Pos3) -> Result<(), SearchError> {
        let Some(region) = self.bounds else {
            return Ok(());
        };
        if !region.contains(start) {
            return Err(SearchError::out_of_region(Endpoint::Start, start, region));
        }
        if !region.contains(goal) {
            return Err(SearchError::out_of_region(Endpoint::Goal, goal, region));
        }
        Ok(())
    }

    fn in_bounds(&self, p: Pos3) -> bool {
        self.bounds.is_none_or(|r| r.contains(p))
    }

    /// Whether a single step from `pos` through `side` is allowed.
    pub fn links(&self, pos: Pos3, side: Facing) -> bool {
        self.step(pos, side).is_some()
    }

    /// The cell reached by stepping from `pos` through `side`, if the link
    /// holds and the cell exists.
    fn step(&self, pos: Pos3, side: Facing) -> Option<Pos3> {
        if !self.world.can_connect(pos, side) {
            return None;
        }
        let next = pos.checked_offset(side)?;
        if !self.in_bounds(next) {
            return None;
        }
        if self.strict && !self.world.can_connect(next, side.opposite()) {
            return None;
        }
        Some(next)
    }
}

impl<W: Connectable> TraversalPolicy<Pos3> for ConnectedPolicy<W> {
    fn on_visit(&self, _search: &SearchState<Pos3>, node: &Pos3) -> bool {
        !self.in_bounds(*node)
    }

    fn neighbors(&self, _search: &SearchState<Pos3>, node: &Pos3, buf: &mut Vec<Pos3>) {
        buf.extend(Facing::ALL.into_iter().filter_map(|side| self.step(*node, side)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AStar, Search, SearchOutcome};

    fn cable(cells: &[(i32, i32, i32)]) -> HashSet<Pos3> {
        cells.iter().map(|&(x, y, z)| Pos3::new(x, y, z)).collect()
    }

    #[test]
    fn follows_cable_around_a_corner() {
        let net = cable(&[(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0), (2, 2, 0)]);
        let mut search = AStar::new(Pos3::new(2, 2, 0), ConnectedPolicy::new(net));
        let path = search.find_nodes(Pos3::ZERO).into_path().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.cost(), 4.0);
        assert_eq!(path.nodes()[2], Pos3::new(2, 0, 0));
    }

    #[test]
    fn separate_cables_have_no_path() {
        let net = cable(&[(0, 0, 0), (1, 0, 0), (3, 0, 0), (4, 0, 0)]);
        let mut search = AStar::new(Pos3::new(4, 0, 0), ConnectedPolicy::new(net));
        assert_eq!(search.find_nodes(Pos3::ZERO), SearchOutcome::NoPath);
    }

    #[test]
    fn strict_requires_both_sides() {
        // A one-way valve: (0,0,0) offers east, (1,0,0) refuses west.
        let world = |pos: Pos3, side: Facing| match (pos.x, side) {
            (0, Facing::East) => true,
            (1, Facing::West) => false,
            (1, Facing::East) | (2, Facing::West) => true,
            _ => false,
        };
        let goal = Pos3::new(2, 0, 0);

        let mut loose = AStar::new(goal, ConnectedPolicy::new(world));
        assert!(loose.find_nodes(Pos3::ZERO).is_found());

        let mut strict = AStar::new(goal, ConnectedPolicy::new(world).strict());
        assert_eq!(strict.find_nodes(Pos3::ZERO), SearchOutcome::NoPath);
    }

    #[test]
    fn bounds_clip_neighbors_and_veto_outside() {
        let region = Region::with_size(3, 1, 1);
        let policy = ConnectedPolicy::new(|_: Pos3, _: Facing| true).bounded(region);
        let st = SearchState::new(Pos3::ZERO);

        let mut buf = Vec::new();
        policy.neighbors(&st, &Pos3::ZERO, &mut buf);
        assert_eq!(buf, vec![Pos3::new(1, 0, 0)]);

        assert!(policy.on_visit(&st, &Pos3::new(5, 0, 0)));
        assert!(!policy.on_visit(&st, &Pos3::new(2, 0, 0)));

        let mut search = AStar::new(Pos3::new(2, 0, 0), &policy);
        assert_eq!(
            search.find_nodes(Pos3::new(-1, 0, 0)),
            SearchOutcome::Aborted { at: Pos3::new(-1, 0, 0) }
        );
    }

    #[test]
    fn endpoints_are_validated() {
        let region = Region::with_size(4, 4, 4);
        let policy = ConnectedPolicy::new(|_: Pos3, _: Facing| true).bounded(region);
        assert!(policy.check_endpoints(Pos3::ZERO, Pos3::new(3, 3, 3)).is_ok());
        assert!(matches!(
            policy.check_endpoints(Pos3::new(-1, 0, 0), Pos3::ZERO),
            Err(SearchError::InvalidInput { role: Endpoint::Start, .. })
        ));
        assert!(matches!(
            policy.check_endpoints(Pos3::ZERO, Pos3::new(0, 4, 0)),
            Err(SearchError::InvalidInput { role: Endpoint::Goal, .. })
        ));
        let unbounded = ConnectedPolicy::new(|_: Pos3, _: Facing| true);
        assert!(unbounded.check_endpoints(Pos3::new(-9, 0, 0), Pos3::ZERO).is_ok());
    }

    #[test]
    fn links_stop_at_the_coordinate_edge() {
        let edge = Pos3::new(i32::MAX, 0, 0);
        let policy = ConnectedPolicy::new(|_: Pos3, _: Facing| true);
        assert!(!policy.links(edge, Facing::East));
        assert!(policy.links(edge, Facing::West));
        let st = SearchState::new(edge);
        let mut buf = Vec::new();
        policy.neighbors(&st, &edge, &mut buf);
        assert_eq!(buf.len(), 5);

        let net = cable(&[(i32::MAX - 1, 0, 0), (i32::MAX, 0, 0)]);
        assert!(!net.can_connect(edge, Facing::East));
        assert!(net.can_connect(edge, Facing::West));
    }
}
