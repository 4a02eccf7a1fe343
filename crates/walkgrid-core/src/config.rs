//! Grid construction parameters.

use crate::world::Vec3;

/// Layout of a grid in world space.
///
/// Cell `(0, 0)` sits at `origin - RIGHT * width / 2 - FORWARD * height / 2`,
/// with the offset counted in world units rather than cells, and cell
/// `(x, y)` is `node_size * (x, y)` further along. The `width * node_size`
/// span starting at cell `(0, 0)` is therefore centered on `origin` only
/// when `node_size` is 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of cells along the right axis.
    pub width: i32,
    /// Number of cells along the forward axis.
    pub height: i32,
    /// World-space edge length of one cell.
    pub node_size: f32,
    pub origin: Vec3,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            node_size: 1.0,
            origin: Vec3::ZERO,
        }
    }
}

impl GridConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_node_size(mut self, node_size: f32) -> Self {
        self.node_size = node_size;
        self
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }
}
