use std::fmt;

use walkgrid_core::Point;

/// Errors returned by [`PathSearch::find_path`](crate::PathSearch::find_path).
///
/// A degraded path (destination substituted because the target is
/// unreachable) is not an error; see [`Path::is_degraded`](crate::Path::is_degraded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or target is not a cell of the searched range.
    OutOfBounds(Point),
    /// The target is unreachable and no substitute could be chosen: the
    /// start has no walkable way out, or fallback is disabled.
    NoPathAvailable { start: Point, target: Point },
    /// A search attempt expanded more nodes than allowed.
    IterationLimit { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "search: node {p} is outside the grid"),
            Self::NoPathAvailable { start, target } => {
                write!(f, "search: no path available from {start} to {target}")
            }
            Self::IterationLimit { limit } => {
                write!(f, "search: gave up after expanding {limit} nodes")
            }
        }
    }
}

impl std::error::Error for SearchError {}
