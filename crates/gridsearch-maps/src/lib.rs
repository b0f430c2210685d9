//! Map files, ASCII rendering and random test cases for grid search.

pub mod mapfile;
pub mod mapgen;
pub mod render;

pub use mapfile::{
    ParseError, parse_description, read_description, save_description, write_description,
};
pub use mapgen::{Case, CaseGenerator, CaseKind, CaseParams};
pub use render::{LEGEND, render_map, render_solution};
