//! Grid model shared by the search strategies.
//!
//! This crate provides the value types every other *gridsearch* crate works
//! with: geometry primitives, the four cardinal moves, wall rectangles, the
//! parsed grid description and the validated, read-only [`GridModel`].

pub mod geom;
pub mod grid;
pub mod moves;

pub use geom::{Point, Range};
pub use grid::{GridDescription, GridError, GridModel, Wall};
pub use moves::{Move, ParseMoveError};
