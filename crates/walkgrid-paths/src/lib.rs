//! A* pathfinding with closest-reachable fallback for walkability grids.
//!
//! The engine, [`PathSearch`], finds shortest 8-directional paths between two
//! cells of a [`Grid`](walkgrid_core::Grid) (or any [`AstarPather`]). When the
//! target cannot be reached it degrades to a path towards the most promising
//! explored cell near the target instead of failing outright.
//!
//! ```
//! use walkgrid_core::{Grid, Point, Vec3};
//! use walkgrid_paths::{PathSearch, SearchConfig};
//!
//! let grid = Grid::build(8, 8, 1.0, Vec3::ZERO, |pos, _radius| pos.x.abs() < 0.5 && pos.z < 2.0)
//!     .unwrap();
//! let mut search = PathSearch::for_grid(&grid, SearchConfig::default());
//! let path = search.find_path(&grid, Point::new(0, 0), Point::new(7, 0)).unwrap();
//! assert_eq!(path.destination(), Some(Point::new(7, 0)));
//! assert!(!path.is_degraded());
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbors, walkability |
//! | [`WeightedPather`] : [`Pather`] | step cost |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic, straight-line distance |

mod astar;
mod config;
mod distance;
mod error;
mod grid;
mod path;
mod search;
mod snapshot;
mod traits;

pub use config::{DEFAULT_FALLBACK_CANDIDATES, DEFAULT_MAX_EXPANSIONS, SearchConfig};
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::SearchError;
pub use path::Path;
pub use search::PathSearch;
pub use snapshot::{Candidate, Fallback, SearchSnapshot};
pub use traits::{AstarPather, Pather, WeightedPather};
