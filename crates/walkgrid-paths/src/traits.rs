use walkgrid_core::Point;

use crate::distance::euclidean;

/// Minimal pathfinding interface: neighbor enumeration and walkability.
pub trait Pather {
    /// Append neighbors of `p` into `buf`, in a deterministic order. The
    /// caller clears `buf` before calling. Unwalkable neighbors may be
    /// included; the search filters them with [`Pather::walkable`].
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` may be entered.
    fn walkable(&self, p: Point) -> bool;
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f32;
}

/// Full A* pather.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    ///
    /// Admissibility is not checked. An estimate that overestimates can
    /// make the search return a slightly longer path.
    fn estimate(&self, from: Point, to: Point) -> f32;

    /// Straight-line distance, used to rank substitute targets when the
    /// requested one is unreachable. Defaults to Euclidean cell distance.
    fn distance(&self, from: Point, to: Point) -> f32 {
        euclidean(from, to)
    }
}
