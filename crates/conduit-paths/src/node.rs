use std::hash::Hash;

use conduit_core::Pos3;

/// A point in the search space.
///
/// `distance` is both the edge cost between adjacent nodes and the heuristic
/// estimate towards the goal. It must be non-negative, symmetric and zero
/// only for equal nodes. For A* to return shortest paths it must also never
/// overestimate the true remaining cost (admissible).
pub trait Node: Clone + Eq + Hash {
    fn distance(&self, other: &Self) -> f64;
}

/// A node living on a regular 3D grid, with six face-adjacent neighbors.
pub trait GridNode: Node {
    /// Append the axis-aligned unit neighbors to `buf`. Nodes on the edge of
    /// the coordinate space may have fewer than six.
    fn axis_neighbors(&self, buf: &mut Vec<Self>);
}

impl Node for Pos3 {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        self.euclidean(*other)
    }
}

impl GridNode for Pos3 {
    #[inline]
    fn axis_neighbors(&self, buf: &mut Vec<Self>) {
        buf.extend(self.neighbors_6());
    }
}
