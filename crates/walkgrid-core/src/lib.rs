//! **walkgrid-core**: walkability grids for agent navigation (core types).
//!
//! This crate provides the foundational types used across *walkgrid*:
//! integer grid geometry, world-space vectors, the immutable [`Node`] cell
//! descriptor and the [`Grid`] that maps between world positions and cells.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod node;
pub mod world;

pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::Grid;
pub use node::Node;
pub use world::Vec3;
