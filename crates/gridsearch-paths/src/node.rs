//! Append-only storage for search nodes.
//!
//! Each node stores its position, the move that produced it and the index
//! of its parent, so every path shares its prefix with its siblings and is
//! never copied. Recovering the move list is a walk back to the root.

use gridsearch_core::{Move, Point};

/// Index of a node inside a [`NodeArena`].
pub(crate) type NodeId = usize;

const NO_PARENT: NodeId = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Record {
    pos: Point,
    parent: NodeId,
    mv: Option<Move>,
    depth: u32,
}

#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Record>,
    // Survives `clear`.
    generated: usize,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a root node at `pos` (empty path).
    pub(crate) fn root(&mut self, pos: Point) -> NodeId {
        self.push(Record {
            pos,
            parent: NO_PARENT,
            mv: None,
            depth: 0,
        })
    }

    /// Add the node reached from `parent` by `mv`.
    pub(crate) fn child(&mut self, parent: NodeId, mv: Move) -> NodeId {
        let p = self.nodes[parent];
        self.push(Record {
            pos: mv.apply(p.pos),
            parent,
            mv: Some(mv),
            depth: p.depth + 1,
        })
    }

    fn push(&mut self, rec: Record) -> NodeId {
        self.nodes.push(rec);
        self.generated += 1;
        self.nodes.len() - 1
    }

    /// Drop every node. Ids handed out before are invalidated.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    #[inline]
    pub(crate) fn pos(&self, id: NodeId) -> Point {
        self.nodes[id].pos
    }

    /// Path length from the root.
    #[inline]
    pub(crate) fn depth(&self, id: NodeId) -> u32 {
        self.nodes[id].depth
    }

    /// Position of the parent node, `None` for a root.
    #[inline]
    pub(crate) fn parent_pos(&self, id: NodeId) -> Option<Point> {
        let parent = self.nodes[id].parent;
        (parent != NO_PARENT).then(|| self.nodes[parent].pos)
    }

    /// Moves from the root to `id`, in order.
    pub(crate) fn moves(&self, id: NodeId) -> Vec<Move> {
        let mut out = Vec::with_capacity(self.nodes[id].depth as usize);
        let mut cur = id;
        while cur != NO_PARENT {
            let rec = &self.nodes[cur];
            if let Some(mv) = rec.mv {
                out.push(mv);
            }
            cur = rec.parent;
        }
        out.reverse();
        out
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes ever created, including cleared ones.
    #[inline]
    pub(crate) fn generated(&self) -> usize {
        self.generated
    }
}
