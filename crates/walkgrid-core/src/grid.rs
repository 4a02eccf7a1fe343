//! The [`Grid`] type: a dense 2D array of [`Node`]s laid out in world space.
//!
//! Walkability is sampled exactly once per cell at construction by asking an
//! external obstacle predicate about the cell's world position. The grid is
//! immutable afterwards, so shared references can be handed to any number of
//! readers (including other threads).

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::node::Node;
use crate::world::Vec3;

/// The 3×3 window around a cell, minus its center, in row-major order.
const NEIGHBOR_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

/// A walkability grid.
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: Range,
    node_size: f32,
    origin: Vec3,
    nodes: Vec<Node>,
}

impl Grid {
    /// Build a `width` × `height` grid of cells with edge length `node_size`,
    /// laid out around `origin` as described on [`GridConfig`].
    ///
    /// `is_blocked(center, radius)` is called once per cell, in row-major
    /// order, with the cell's world position and half the node size. A cell
    /// is walkable when the predicate returns `false`.
    pub fn build(
        width: i32,
        height: i32,
        node_size: f32,
        origin: Vec3,
        mut is_blocked: impl FnMut(Vec3, f32) -> bool,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if !(node_size.is_finite() && node_size > 0.0) {
            return Err(GridError::InvalidNodeSize(node_size));
        }

        let bounds = Range::with_size(width, height);
        let bottom_left = origin
            - Vec3::RIGHT * (width as f32 / 2.0)
            - Vec3::FORWARD * (height as f32 / 2.0);
        let radius = node_size / 2.0;

        let nodes: Vec<Node> = bounds
            .iter()
            .map(|p| {
                let world = bottom_left
                    + Vec3::RIGHT * (p.x as f32 * node_size)
                    + Vec3::FORWARD * (p.y as f32 * node_size);
                Node::new(p, !is_blocked(world, radius), world)
            })
            .collect();

        let grid = Self {
            bounds,
            node_size,
            origin,
            nodes,
        };
        log::debug!(
            "built {}x{} grid (node size {}), {} of {} cells walkable",
            width,
            height,
            node_size,
            grid.walkable_count(),
            grid.nodes.len()
        );
        Ok(grid)
    }

    /// Build a grid from a [`GridConfig`].
    pub fn from_config(
        config: &GridConfig,
        is_blocked: impl FnMut(Vec3, f32) -> bool,
    ) -> Result<Self, GridError> {
        Self::build(
            config.width,
            config.height,
            config.node_size,
            config.origin,
            is_blocked,
        )
    }

    /// The range of valid cell coordinates, `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn node_size(&self) -> f32 {
        self.node_size
    }

    /// World-space anchor the grid was built around.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The node at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.bounds.index(p).map(|i| &self.nodes[i])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.node(p).is_some_and(Node::is_walkable)
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_walkable()).count()
    }

    /// The cell nearest to `point`.
    ///
    /// The point is projected onto the grid plane and expressed as a fraction
    /// of the span covered by cell centers. The fraction is clamped to
    /// `[0, 1]` on both axes, so positions outside the grid snap to the
    /// nearest edge cell. Always succeeds.
    pub fn node_from_world_position(&self, point: Vec3) -> &Node {
        let first = self.nodes[0].world_position();
        let x = axis_index(point.x - first.x, self.width(), self.node_size);
        let y = axis_index(point.z - first.z, self.height(), self.node_size);
        &self.nodes[y as usize * self.width() as usize + x as usize]
    }

    /// Nearest cell to an arbitrary world position, regardless of
    /// walkability. Used to seed an agent's starting cell.
    #[inline]
    pub fn closest_node_to_world_position(&self, point: Vec3) -> &Node {
        self.node_from_world_position(point)
    }

    /// In-bounds cells of the 3×3 window around `node`, excluding `node`
    /// itself, in row-major order.
    pub fn neighbors<'a>(&'a self, node: &Node) -> impl Iterator<Item = &'a Node> + 'a {
        let p = node.pos();
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |d| self.node(p + d))
    }

    /// Append the in-bounds neighbor coordinates of `p` into `buf`, in the
    /// same order as [`Grid::neighbors`].
    pub fn neighbors_into(&self, p: Point, buf: &mut Vec<Point>) {
        for d in NEIGHBOR_OFFSETS {
            let n = p + d;
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }
}

/// Nearest cell index along one axis for a world-space `offset` from the
/// first cell center.
fn axis_index(offset: f32, cells: i32, node_size: f32) -> i32 {
    if cells <= 1 {
        return 0;
    }
    let last = (cells - 1) as f32;
    let fraction = offset / (last * node_size);
    if fraction.is_nan() {
        return 0;
    }
    (last * fraction.clamp(0.0, 1.0)).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(width: i32, height: i32) -> Grid {
        Grid::build(width, height, 1.0, Vec3::ZERO, |_, _| false).unwrap()
    }

    #[test]
    fn build_populates_every_cell_once() {
        let mut calls = Vec::new();
        let grid = Grid::build(4, 3, 1.0, Vec3::ZERO, |pos, r| {
            calls.push((pos, r));
            false
        })
        .unwrap();
        assert_eq!(grid.len(), 12);
        assert_eq!(calls.len(), 12);
        for (i, node) in grid.nodes().iter().enumerate() {
            assert_eq!(grid.bounds().point(i), node.pos());
            assert_eq!(calls[i].0, node.world_position());
            assert_eq!(calls[i].1, 0.5);
        }
    }

    #[test]
    fn build_world_positions() {
        let origin = Vec3::new(10.0, 1.0, -4.0);
        let grid = Grid::build(4, 2, 2.0, origin, |_, _| false).unwrap();
        let n00 = grid.node(Point::new(0, 0)).unwrap();
        assert_eq!(n00.world_position(), Vec3::new(8.0, 1.0, -5.0));
        let n31 = grid.node(Point::new(3, 1)).unwrap();
        assert_eq!(n31.world_position(), Vec3::new(14.0, 1.0, -3.0));
    }

    #[test]
    fn origin_offset_ignores_node_size() {
        // Span covered by cells, from the first cell to one node past the last.
        let span = |node_size: f32| {
            let grid = Grid::build(4, 2, node_size, Vec3::ZERO, |_, _| false).unwrap();
            let first = grid.node(Point::new(0, 0)).unwrap().world_position();
            let last = grid.node(Point::new(3, 1)).unwrap().world_position();
            (first.x, last.x + node_size, first.z, last.z + node_size)
        };
        assert_eq!(span(1.0), (-2.0, 2.0, -1.0, 1.0));
        // The offset stays at half the cell count, so larger cells extend past
        // the far side of the origin.
        assert_eq!(span(2.0), (-2.0, 6.0, -1.0, 3.0));
    }

    #[test]
    fn build_samples_walkability() {
        // Block everything with positive x.
        let grid = Grid::build(4, 4, 1.0, Vec3::ZERO, |pos, _| pos.x > 0.0).unwrap();
        assert!(grid.is_walkable(Point::new(0, 0)));
        assert!(grid.is_walkable(Point::new(2, 3)));
        assert!(!grid.is_walkable(Point::new(3, 0)));
        assert!(!grid.is_walkable(Point::new(9, 9)));
        assert_eq!(grid.walkable_count(), 12);
    }

    #[test]
    fn build_rejects_degenerate_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (-1, 3), (0, 0)] {
            let err = Grid::build(w, h, 1.0, Vec3::ZERO, |_, _| false).unwrap_err();
            assert_eq!(err, GridError::InvalidDimensions { width: w, height: h });
        }
    }

    #[test]
    fn build_rejects_bad_node_size() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = Grid::build(3, 3, size, Vec3::ZERO, |_, _| false).unwrap_err();
            assert!(matches!(err, GridError::InvalidNodeSize(_)));
        }
    }

    #[test]
    fn from_config_matches_build() {
        let config = GridConfig::new(6, 3)
            .with_node_size(0.5)
            .with_origin(Vec3::new(1.0, 0.0, 1.0));
        let a = Grid::from_config(&config, |_, _| false).unwrap();
        let b = Grid::build(6, 3, 0.5, Vec3::new(1.0, 0.0, 1.0), |_, _| false).unwrap();
        assert_eq!(a.nodes(), b.nodes());
        assert_eq!(a.node_size(), 0.5);
    }

    #[test]
    fn world_lookup_maps_node_centers_to_themselves() {
        let grid = Grid::build(7, 5, 0.75, Vec3::new(3.0, 0.0, -2.0), |_, _| false).unwrap();
        for node in grid.nodes() {
            let found = grid.node_from_world_position(node.world_position());
            assert_eq!(found.pos(), node.pos());
        }
    }

    #[test]
    fn world_lookup_rounds_to_nearest_cell() {
        let grid = open_grid(5, 5);
        let n = grid.node(Point::new(2, 3)).unwrap().world_position();
        let found = grid.node_from_world_position(n + Vec3::new(0.4, 7.0, -0.3));
        assert_eq!(found.pos(), Point::new(2, 3));
        let found = grid.node_from_world_position(n + Vec3::new(0.6, 0.0, 0.0));
        assert_eq!(found.pos(), Point::new(3, 3));
    }

    #[test]
    fn world_lookup_clamps_out_of_bounds() {
        let grid = open_grid(5, 4);
        let far = Vec3::new(1000.0, 0.0, -1000.0);
        assert_eq!(grid.node_from_world_position(far).pos(), Point::new(4, 0));
        let far = Vec3::new(-1000.0, 0.0, 1000.0);
        assert_eq!(grid.node_from_world_position(far).pos(), Point::new(0, 3));
        let nan = Vec3::new(f32::NAN, 0.0, f32::INFINITY);
        assert_eq!(grid.closest_node_to_world_position(nan).pos(), Point::new(0, 3));
    }

    #[test]
    fn world_lookup_single_row() {
        let grid = open_grid(1, 1);
        let found = grid.closest_node_to_world_position(Vec3::new(5.0, 0.0, 5.0));
        assert_eq!(found.pos(), Point::ZERO);
    }

    #[test]
    fn closest_node_ignores_walkability() {
        let grid = Grid::build(3, 3, 1.0, Vec3::ZERO, |_, _| true).unwrap();
        let center = grid.node(Point::new(1, 1)).unwrap();
        let found = grid.closest_node_to_world_position(center.world_position());
        assert_eq!(found.pos(), center.pos());
        assert!(!found.is_walkable());
    }

    #[test]
    fn neighbor_counts() {
        let grid = open_grid(5, 4);
        let count = |x, y| grid.neighbors(grid.node(Point::new(x, y)).unwrap()).count();
        // corners
        assert_eq!(count(0, 0), 3);
        assert_eq!(count(4, 0), 3);
        assert_eq!(count(0, 3), 3);
        assert_eq!(count(4, 3), 3);
        // edges
        assert_eq!(count(2, 0), 5);
        assert_eq!(count(0, 1), 5);
        assert_eq!(count(4, 2), 5);
        assert_eq!(count(1, 3), 5);
        // interior
        assert_eq!(count(1, 1), 8);
        assert_eq!(count(3, 2), 8);
    }

    #[test]
    fn neighbors_exclude_self_and_stay_in_bounds() {
        let grid = open_grid(4, 3);
        for node in grid.nodes() {
            for n in grid.neighbors(node) {
                assert_ne!(n.pos(), node.pos());
                assert!(grid.contains(n.pos()));
                assert!((n.x() - node.x()).abs() <= 1);
                assert!((n.y() - node.y()).abs() <= 1);
            }
        }
    }

    #[test]
    fn neighbors_are_row_major() {
        let grid = open_grid(3, 3);
        let center = grid.node(Point::new(1, 1)).unwrap();
        let got: Vec<Point> = grid.neighbors(center).map(Node::pos).collect();
        let mut sorted = got.clone();
        sorted.sort();
        assert_eq!(got, sorted);

        let mut buf = Vec::new();
        grid.neighbors_into(center.pos(), &mut buf);
        assert_eq!(buf, got);
    }

    #[test]
    fn neighbors_include_unwalkable_cells() {
        let grid = Grid::build(3, 3, 1.0, Vec3::ZERO, |_, _| true).unwrap();
        let center = grid.node(Point::new(1, 1)).unwrap();
        assert_eq!(grid.neighbors(center).count(), 8);
    }
}
