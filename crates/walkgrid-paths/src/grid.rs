//! [`Grid`] as a search graph.
//!
//! Step cost is the Euclidean distance between the two cells' world
//! positions; the heuristic is the Manhattan distance in cell units. The two
//! metrics do not match, so for node sizes below 1 (or diagonal-heavy
//! routes) the heuristic can overestimate and the returned path is then only
//! approximately shortest. This is a known approximation.

use walkgrid_core::{Grid, Point};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

fn world_distance(grid: &Grid, a: Point, b: Point) -> f32 {
    match (grid.node(a), grid.node(b)) {
        (Some(a), Some(b)) => a.world_position().distance(b.world_position()),
        _ => f32::INFINITY,
    }
}

impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.neighbors_into(p, buf);
    }

    fn walkable(&self, p: Point) -> bool {
        self.is_walkable(p)
    }
}

impl WeightedPather for Grid {
    fn cost(&self, from: Point, to: Point) -> f32 {
        world_distance(self, from, to)
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> f32 {
        manhattan(from, to) as f32
    }

    fn distance(&self, from: Point, to: Point) -> f32 {
        world_distance(self, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkgrid_core::Vec3;

    #[test]
    fn costs_follow_world_space() {
        let grid = Grid::build(4, 4, 2.0, Vec3::ZERO, |_, _| false).unwrap();
        let a = Point::new(1, 1);
        assert_eq!(grid.cost(a, Point::new(2, 1)), 2.0);
        assert!((grid.cost(a, Point::new(2, 2)) - 8f32.sqrt()).abs() < 1e-6);
        // The heuristic stays in cell units regardless of node size.
        assert_eq!(grid.estimate(a, Point::new(3, 3)), 4.0);
        assert!((AstarPather::distance(&grid, a, Point::new(3, 3)) - 32f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn out_of_bounds_is_unwalkable_and_unreachable() {
        let grid = Grid::build(2, 2, 1.0, Vec3::ZERO, |_, _| false).unwrap();
        assert!(!grid.walkable(Point::new(2, 0)));
        assert_eq!(grid.cost(Point::ZERO, Point::new(-1, 0)), f32::INFINITY);
    }
}
