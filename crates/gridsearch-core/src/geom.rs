//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Coordinates are screen-like: X grows right, Y grows down, so moving
//! "up" decreases `y`.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid position `(x, y)`.
///
/// Equality, hashing and ordering are structural (`x` first, then `y`), so a
/// `Point` can be used directly as a map or set key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point `dx` columns right and `dy` rows down.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// `|dx| + |dy|`, the number of moves between two cells on an open
    /// grid.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, delta: Self) -> Self {
        self.shift(delta.x, delta.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// The cells `min.x ≤ x < max.x`, `min.y ≤ y < max.y`.
///
/// Serves as the grid bounds, where it also defines the row-major cell
/// numbering used by every per-cell table, and as the footprint of a wall.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// `width` columns by `height` rows with `origin` as the top-left cell.
    /// Empty (the default range) unless both extents are positive. The far
    /// edge saturates at `i32::MAX`.
    pub fn sized(origin: Point, width: i32, height: i32) -> Self {
        if width <= 0 || height <= 0 {
            return Self::default();
        }
        Self {
            min: origin,
            max: Point::new(
                origin.x.saturating_add(width),
                origin.y.saturating_add(height),
            ),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// The part of `self` that lies inside `bounds`.
    pub fn clip(self, bounds: Range) -> Self {
        let min = Point::new(self.min.x.max(bounds.min.x), self.min.y.max(bounds.min.y));
        let max = Point::new(self.max.x.min(bounds.max.x), self.max.y.min(bounds.max.y));
        Self::sized(min, max.x - min.x, max.y - min.y)
    }

    /// Row-major number of `p`, `None` outside the range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p).then(|| {
            let row = (p.y - self.min.y) as usize;
            let col = (p.x - self.min.x) as usize;
            row * self.width() as usize + col
        })
    }

    /// The cell numbered `i`, the inverse of [`index`](Self::index).
    #[inline]
    pub fn point(self, i: usize) -> Option<Point> {
        if i >= self.len() {
            return None;
        }
        let w = self.width() as usize;
        Some(self.min.shift((i % w) as i32, (i / w) as i32))
    }

    /// Every cell in row-major order.
    pub fn iter(self) -> Cells {
        Cells {
            range: self,
            next: 0,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

/// Iterator over the cells of a [`Range`], see [`Range::iter`].
#[derive(Clone, Debug)]
pub struct Cells {
    range: Range,
    next: usize,
}

impl Iterator for Cells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let p = self.range.point(self.next)?;
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.range.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifting_and_adding() {
        let p = Point::new(2, 5);
        assert_eq!(p.shift(-2, 1), Point::new(0, 6));
        assert_eq!(p + Point::new(1, -1), Point::new(3, 4));
        assert_eq!(Point::from((7, 8)), Point::new(7, 8));
        assert_eq!(p.to_string(), "(2, 5)");
    }

    #[test]
    fn points_sort_by_x_then_y() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]);
    }

    #[test]
    fn manhattan() {
        assert_eq!(Point::ZERO.manhattan(Point::new(4, 4)), 8);
        assert_eq!(Point::new(3, -2).manhattan(Point::new(1, 1)), 5);
        assert_eq!(Point::new(6, 1).manhattan(Point::new(6, 1)), 0);
    }

    #[test]
    fn sized_bounds() {
        let r = Range::sized(Point::new(1, 2), 3, 2);
        assert_eq!((r.width(), r.height(), r.len()), (3, 2, 6));
        assert!(r.contains(Point::new(1, 2)));
        assert!(r.contains(Point::new(3, 3)));
        assert!(!r.contains(Point::new(4, 2)));
        assert!(!r.contains(Point::new(1, 4)));
        assert!(!r.contains(Point::new(0, 2)));
    }

    #[test]
    fn non_positive_extent_is_empty() {
        for (w, h) in [(0, 3), (3, 0), (-1, 2), (2, -5)] {
            let r = Range::sized(Point::new(4, 4), w, h);
            assert!(r.is_empty());
            assert_eq!(r.len(), 0);
            assert_eq!(r.iter().next(), None);
            assert!(!r.contains(Point::new(4, 4)));
        }
    }

    #[test]
    fn far_edge_saturates() {
        let r = Range::sized(Point::new(i32::MAX - 1, 0), 5, 1);
        assert_eq!(r.max, Point::new(i32::MAX, 1));
        assert!(r.contains(Point::new(i32::MAX - 1, 0)));
        assert!(r.clip(Range::sized(Point::ZERO, 4, 4)).is_empty());
    }

    #[test]
    fn clip_to_bounds() {
        let bounds = Range::sized(Point::ZERO, 5, 4);
        // A wall hanging over the bottom-right corner.
        let wall = Range::sized(Point::new(3, 2), 4, 4);
        assert_eq!(wall.clip(bounds), Range::sized(Point::new(3, 2), 2, 2));
        let outside = Range::sized(Point::new(9, 9), 2, 2);
        assert!(outside.clip(bounds).is_empty());
    }

    #[test]
    fn numbering_is_row_major() {
        let r = Range::sized(Point::ZERO, 4, 3);
        assert_eq!(r.index(Point::new(3, 0)), Some(3));
        assert_eq!(r.index(Point::new(0, 1)), Some(4));
        assert_eq!(r.index(Point::new(3, 2)), Some(11));
        assert_eq!(r.index(Point::new(4, 0)), None);
        assert_eq!(r.point(12), None);
        assert_eq!(r.iter().len(), 12);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
            assert_eq!(r.point(i), Some(p));
        }
    }
}
