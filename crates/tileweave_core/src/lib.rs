//! Core data structures for tileweave
//!
//! This crate provides the fundamental types consumed by the autotile fill
//! engine:
//! - `TileLayer` - An offset tile grid, used as placement and background surface
//! - `Rect` / `Region` - The area being filled, as a union of rectangles
//! - `Grid` - Sparse point-to-value storage with a default for untouched cells
//! - `StaggerLayout` - Neighbor arithmetic for staggered (hex-like) grids

mod grid;
mod layer;
mod region;
mod stagger;

pub use grid::Grid;
pub use layer::TileLayer;
pub use region::{Rect, Region};
pub use stagger::{StaggerAxis, StaggerIndex, StaggerLayout};
