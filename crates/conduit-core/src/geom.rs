//! Geometry primitives: [`Pos3`], [`Facing`] and [`Region`].
//!
//! Positions are integer cells of a voxel-style grid. X grows east, Y grows
//! up, Z grows south.

use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------
// Pos3
// ---------------------------------------------------------------------------

/// A 3D integer cell position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Pos3 {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Return a position shifted by (dx, dy, dz).
    ///
    /// Panics on overflow in debug builds; use [`Pos3::checked_offset`] near
    /// the edge of the coordinate range.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// The adjacent cell on the given side, or `None` if it falls outside
    /// the `i32` range.
    #[inline]
    pub const fn checked_offset(self, side: Facing) -> Option<Self> {
        let d = side.delta();
        let (Some(x), Some(y), Some(z)) = (
            self.x.checked_add(d.x),
            self.y.checked_add(d.y),
            self.z.checked_add(d.z),
        ) else {
            return None;
        };
        Some(Self { x, y, z })
    }

    /// The face-adjacent cells, in [`Facing::ALL`] order. Sides that would
    /// leave the `i32` range are skipped, so cells on the boundary have
    /// fewer than six.
    #[inline]
    pub fn neighbors_6(self) -> impl Iterator<Item = Pos3> {
        Facing::ALL
            .into_iter()
            .filter_map(move |side| self.checked_offset(side))
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Pos3) -> i64 {
        (i64::from(self.x) - i64::from(other.x)).abs()
            + (i64::from(self.y) - i64::from(other.y)).abs()
            + (i64::from(self.z) - i64::from(other.z)).abs()
    }

    /// Straight-line (L2) distance.
    #[inline]
    pub fn euclidean(self, other: Pos3) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Pos3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Facing
// ---------------------------------------------------------------------------

/// One of the six faces of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Facing {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Facing {
    /// All faces, in the order neighbors are generated.
    pub const ALL: [Facing; 6] = [
        Facing::Down,
        Facing::Up,
        Facing::North,
        Facing::South,
        Facing::West,
        Facing::East,
    ];

    /// The face pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Facing {
        match self {
            Facing::Down => Facing::Up,
            Facing::Up => Facing::Down,
            Facing::North => Facing::South,
            Facing::South => Facing::North,
            Facing::West => Facing::East,
            Facing::East => Facing::West,
        }
    }

    /// Unit offset towards this face.
    #[inline]
    pub const fn delta(self) -> Pos3 {
        match self {
            Facing::Down => Pos3::new(0, -1, 0),
            Facing::Up => Pos3::new(0, 1, 0),
            Facing::North => Pos3::new(0, 0, -1),
            Facing::South => Pos3::new(0, 0, 1),
            Facing::West => Pos3::new(-1, 0, 0),
            Facing::East => Pos3::new(1, 0, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A half-open box \[min, max). `min` is inclusive, `max` is exclusive.
///
/// All empty regions are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub min: Pos3,
    pub max: Pos3,
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Region {}

impl Hash for Region {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            Pos3::ZERO.hash(state);
            Pos3::ZERO.hash(state);
        } else {
            self.min.hash(state);
            self.max.hash(state);
        }
    }
}

impl Region {
    /// Create a region from two corners, canonicalized so that `min` ≤ `max`
    /// on each axis.
    #[inline]
    pub fn new(a: Pos3, b: Pos3) -> Self {
        Self {
            min: Pos3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Pos3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Region spanning `[0, w) × [0, h) × [0, d)`.
    #[inline]
    pub fn with_size(w: i32, h: i32, d: i32) -> Self {
        Self::new(Pos3::ZERO, Pos3::new(w, h, d))
    }

    /// Extent along Y.
    #[inline]
    pub fn height(self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y)
    }

    /// Whether the region has zero or negative volume.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y || self.min.z >= self.max.z
    }

    /// Whether `p` is inside the half-open region.
    #[inline]
    pub fn contains(self, p: Pos3) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    /// Iterator over every cell, X fastest, then Y, then Z.
    #[inline]
    pub fn iter(self) -> RegionIter {
        RegionIter {
            region: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Region {
    type Item = Pos3;
    type IntoIter = RegionIter;
    #[inline]
    fn into_iter(self) -> RegionIter {
        self.iter()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Iterator over the cells of a [`Region`].
#[derive(Clone, Debug)]
pub struct RegionIter {
    region: Region,
    cur: Pos3,
}

impl Iterator for RegionIter {
    type Item = Pos3;

    fn next(&mut self) -> Option<Pos3> {
        if self.region.is_empty() || self.cur.z >= self.region.max.z {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.region.max.x {
            self.cur.x = self.region.min.x;
            self.cur.y += 1;
            if self.cur.y >= self.region.max.y {
                self.cur.y = self.region.min.y;
                self.cur.z += 1;
            }
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn offset_and_opposite_cancel() {
        let p = Pos3::new(3, -2, 7);
        for side in Facing::ALL {
            let q = p.checked_offset(side).unwrap();
            assert_eq!(q.checked_offset(side.opposite()), Some(p));
            let d = side.delta();
            assert_eq!(q, p.shift(d.x, d.y, d.z));
        }
    }

    #[test]
    fn neighbors_are_unit_distance() {
        let p = Pos3::new(1, 1, 1);
        let unique: HashSet<Pos3> = p.neighbors_6().collect();
        assert_eq!(unique.len(), 6);
        for n in unique {
            assert_eq!(p.manhattan(n), 1);
            assert_eq!(p.euclidean(n), 1.0);
        }
    }

    #[test]
    fn neighbors_skip_sides_past_the_coordinate_range() {
        let corner = Pos3::new(i32::MAX, 0, i32::MIN);
        assert_eq!(corner.checked_offset(Facing::East), None);
        assert_eq!(corner.checked_offset(Facing::North), None);
        assert_eq!(
            corner.checked_offset(Facing::West),
            Some(Pos3::new(i32::MAX - 1, 0, i32::MIN))
        );
        let ns: Vec<Pos3> = corner.neighbors_6().collect();
        assert_eq!(
            ns,
            vec![
                Pos3::new(i32::MAX, -1, i32::MIN),
                Pos3::new(i32::MAX, 1, i32::MIN),
                Pos3::new(i32::MAX, 0, i32::MIN + 1),
                Pos3::new(i32::MAX - 1, 0, i32::MIN),
            ]
        );
    }

    #[test]
    fn euclidean_distance() {
        let a = Pos3::ZERO;
        let b = Pos3::new(2, 3, 6);
        assert_eq!(a.euclidean(b), 7.0);
        assert_eq!(b.euclidean(a), 7.0);
        assert_eq!(a.euclidean(a), 0.0);
    }

    #[test]
    fn distances_span_the_whole_coordinate_range() {
        let lo = Pos3::new(i32::MIN, 0, 0);
        let hi = Pos3::new(i32::MAX, 0, 0);
        assert_eq!(lo.euclidean(hi), 4_294_967_295.0);
        assert_eq!(hi.euclidean(lo), 4_294_967_295.0);
        assert_eq!(lo.manhattan(hi), 4_294_967_295);
        let far = Pos3::new(i32::MIN, i32::MIN, i32::MIN);
        let near = Pos3::new(i32::MAX, i32::MAX, i32::MAX);
        assert_eq!(far.manhattan(near), 3 * 4_294_967_295);
    }

    #[test]
    fn region_canonicalizes_and_counts() {
        let r = Region::new(Pos3::new(4, 0, 2), Pos3::new(0, 3, 0));
        assert_eq!(r.min, Pos3::new(0, 0, 0));
        assert_eq!(r.max, Pos3::new(4, 3, 2));
        assert_eq!(r.height(), 3);
        assert_eq!(r.iter().count(), 24);
        assert!(r.contains(Pos3::new(3, 2, 1)));
        assert!(!r.contains(Pos3::new(4, 2, 1)));
    }

    #[test]
    fn region_iter_order() {
        let cells: Vec<Pos3> = Region::with_size(2, 1, 2).into_iter().collect();
        assert_eq!(
            cells,
            vec![
                Pos3::new(0, 0, 0),
                Pos3::new(1, 0, 0),
                Pos3::new(0, 0, 1),
                Pos3::new(1, 0, 1),
            ]
        );
    }

    #[test]
    fn empty_regions_compare_equal() {
        let a = Region::with_size(0, 5, 5);
        let b = Region::new(Pos3::new(3, 3, 3), Pos3::new(3, 9, 9));
        assert_eq!(a, b);
        assert_eq!(a.iter().count(), 0);
        assert_ne!(a, Region::with_size(1, 1, 1));
    }

    #[test]
    fn height_of_extreme_region_does_not_wrap() {
        let r = Region::new(Pos3::new(0, i32::MIN, 0), Pos3::new(1, i32::MAX, 1));
        assert_eq!(r.height(), 4_294_967_295);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn facing_uses_lowercase_names() {
        let json = serde_json::to_string(&Facing::North).unwrap();
        assert_eq!(json, "\"north\"");
    }

    #[test]
    fn region_round_trip() {
        let r = Region::new(Pos3::new(1, 2, 3), Pos3::new(4, 5, 6));
        let json = serde_json::to_string(&r).unwrap();
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
