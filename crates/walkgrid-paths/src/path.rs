use walkgrid_core::{Grid, Node, Point, Vec3};

/// The result of a successful search.
///
/// `steps` runs from the cell just after the start up to and including the
/// destination; the start itself is never included. When the requested
/// target was unreachable the destination is a reachable substitute and
/// [`Path::is_degraded`] reports `true`. The substitute may be the start,
/// in which case the path is empty and the agent should stay put.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    start: Point,
    steps: Vec<Point>,
    requested: Point,
    cost: f32,
}

impl Path {
    pub(crate) fn new(start: Point, steps: Vec<Point>, requested: Point, cost: f32) -> Self {
        Self {
            start,
            steps,
            requested,
            cost,
        }
    }

    /// Cells to walk through, in order.
    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// The cell the search started from.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The target originally asked for.
    #[inline]
    pub fn requested(&self) -> Point {
        self.requested
    }

    /// Last cell of the path, `None` for an empty path.
    #[inline]
    pub fn destination(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    /// Whether the path ends somewhere other than the requested target.
    /// An empty path ends at its start.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.destination().unwrap_or(self.start) != self.requested
    }

    /// Sum of step costs from the start to the destination.
    #[inline]
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Number of steps (edges walked).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }

    /// The grid nodes along the path. Steps outside `grid` are skipped.
    pub fn nodes<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = &'a Node> + 'a {
        self.steps.iter().filter_map(move |&p| grid.node(p))
    }

    /// World-space waypoints along the path, for movement collaborators.
    pub fn world_positions(&self, grid: &Grid) -> Vec<Vec3> {
        self.nodes(grid).map(Node::world_position).collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_to_start_is_not_degraded() {
        let p = Path::new(Point::new(2, 2), Vec::new(), Point::new(2, 2), 0.0);
        assert!(p.is_empty());
        assert_eq!(p.destination(), None);
        assert!(!p.is_degraded());
    }

    #[test]
    fn empty_path_elsewhere_is_degraded() {
        let p = Path::new(Point::new(0, 0), Vec::new(), Point::new(2, 2), 0.0);
        assert_eq!(p.start(), Point::new(0, 0));
        assert!(p.is_empty());
        assert!(p.is_degraded());
    }

    #[test]
    fn degraded_when_destination_differs() {
        let full = Path::new(
            Point::ZERO,
            vec![Point::new(1, 0), Point::new(2, 0)],
            Point::new(2, 0),
            2.0,
        );
        assert!(!full.is_degraded());
        let partial = Path::new(Point::ZERO, vec![Point::new(1, 0)], Point::new(2, 0), 1.0);
        assert!(partial.is_degraded());
        assert_eq!(partial.destination(), Some(Point::new(1, 0)));
    }

    #[test]
    fn world_positions_follow_steps() {
        let grid = Grid::build(3, 1, 2.0, Vec3::ZERO, |_, _| false).unwrap();
        let p = Path::new(
            Point::ZERO,
            vec![Point::new(1, 0), Point::new(2, 0)],
            Point::new(2, 0),
            4.0,
        );
        assert_eq!(
            p.world_positions(&grid),
            vec![Vec3::new(-1.5 + 2.0, 0.0, -0.5), Vec3::new(-1.5 + 4.0, 0.0, -0.5)]
        );
    }
}
