//! Axis-aligned bounding rectangles (inclusive integer bounds).

use crate::vector::Coord;

/// Closed box `[min_x, max_x] × [min_z, max_z]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

impl Rect {
    #[inline]
    pub const fn new(min_x: i32, min_z: i32, max_x: i32, max_z: i32) -> Self {
        Self {
            min_x,
            min_z,
            max_x,
            max_z,
        }
    }

    /// Bounding box of `points`; `None` for an empty iterator.
    pub fn bounding<I: IntoIterator<Item = Coord>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut r = Rect::new(first.x, first.z, first.x, first.z);
        for p in it {
            r.min_x = r.min_x.min(p.x);
            r.min_z = r.min_z.min(p.z);
            r.max_x = r.max_x.max(p.x);
            r.max_z = r.max_z.max(p.z);
        }
        Some(r)
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.max_z as i64 - self.min_z as i64
    }

    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_z <= p.z && p.z <= self.max_z
    }

    /// Closed-box overlap (touching counts).
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_z <= other.max_z
            && other.min_z <= self.max_z
    }

    /// Common area of two rectangles; `None` unless it has positive width and height.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let r = Rect::new(
            self.min_x.max(other.min_x),
            self.min_z.max(other.min_z),
            self.max_x.min(other.max_x),
            self.max_z.min(other.max_z),
        );
        if r.min_x >= r.max_x || r.min_z >= r.max_z {
            return None;
        }
        Some(r)
    }

    /// Corners in counter-clockwise order starting at `(min_x, min_z)`.
    pub fn vertex_coords(&self) -> [Coord; 4] {
        [
            Coord::new(self.min_x, self.min_z),
            Coord::new(self.max_x, self.min_z),
            Coord::new(self.max_x, self.max_z),
            Coord::new(self.min_x, self.max_z),
        ]
    }
}
