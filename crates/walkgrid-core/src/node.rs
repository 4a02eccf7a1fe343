//! The [`Node`] type: one addressable cell of a navigation grid.

use crate::geom::Point;
use crate::world::Vec3;

/// An immutable grid cell descriptor.
///
/// Nodes are created once by [`Grid::build`](crate::Grid::build) and never
/// change. Search bookkeeping (costs, parents) lives in the search engine,
/// keyed by [`Node::pos`], never on the node itself.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Point,
    walkable: bool,
    world: Vec3,
}

impl Node {
    #[inline]
    pub const fn new(pos: Point, walkable: bool, world: Vec3) -> Self {
        Self {
            pos,
            walkable,
            world,
        }
    }

    /// Grid coordinates; also the node's identity.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Whether agents may occupy or traverse this cell.
    #[inline]
    pub const fn is_walkable(&self) -> bool {
        self.walkable
    }

    /// World-space center of the cell.
    #[inline]
    pub const fn world_position(&self) -> Vec3 {
        self.world
    }
}
