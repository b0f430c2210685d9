use gridsearch_core::{Point, Range};

/// The set of positions a search has processed.
///
/// Every strategy counts a position as visited the first time it is taken
/// off the frontier and found absent here; pushes are never counted. The
/// ledger also remembers the order positions were first processed in, so
/// reports are reproducible.
#[derive(Clone, Debug)]
pub struct VisitedLedger {
    bounds: Range,
    seen: Vec<bool>,
    order: Vec<Point>,
}

impl VisitedLedger {
    /// An empty ledger covering `bounds`.
    pub fn new(bounds: Range) -> Self {
        Self {
            bounds,
            seen: vec![false; bounds.len()],
            order: Vec::new(),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.index(p).is_some_and(|i| self.seen[i])
    }

    /// Record `p`. Returns `true` if it was not already present.
    ///
    /// Points outside the bounds are never recorded.
    pub fn insert(&mut self, p: Point) -> bool {
        let Some(i) = self.bounds.index(p) else {
            return false;
        };
        if self.seen[i] {
            return false;
        }
        self.seen[i] = true;
        self.order.push(p);
        true
    }

    /// Number of distinct positions recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Positions in first-visit order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.order.iter().copied()
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.order
    }
}
