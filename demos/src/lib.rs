//! Shared pieces of the walkgrid demos: text maps, text rendering of a
//! search, and a simple agent that walks a path in world space.

use std::fmt;

use walkgrid_core::{Grid, GridError, Point, Vec3};
use walkgrid_paths::{Path, PathSearch, SearchError, SearchSnapshot};

// ---------------------------------------------------------------------------
// Text maps
// ---------------------------------------------------------------------------

const BLOCKED: char = '#';
const FREE: char = '.';
const START: char = 'S';
const TARGET: char = 'T';

/// A walkability map parsed from text.
///
/// `#` is blocked, `.` is free. `S` and `T` mark a free start and target
/// cell. Line `y` of the text is row `y` of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct AsciiMap {
    size: Point,
    blocked: Vec<bool>,
    start: Option<Point>,
    target: Option<Point>,
}

impl AsciiMap {
    /// Parse a map. Surrounding whitespace is trimmed from the whole
    /// string; every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }
        let mut width: Option<i32> = None;
        let mut blocked = Vec::new();
        let mut start = None;
        let mut target = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                match ch {
                    BLOCKED => blocked.push(true),
                    FREE => blocked.push(false),
                    START if start.is_none() => {
                        start = Some(p);
                        blocked.push(false);
                    }
                    TARGET if target.is_none() => {
                        target = Some(p);
                        blocked.push(false);
                    }
                    _ => return Err(MapError::InvalidChar { ch, pos: p }),
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MapError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            size: Point::new(width.unwrap_or(0), height),
            blocked,
            start,
            target,
        })
    }

    /// (width, height) in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Whether `p` is a `#` cell. Cells outside the map are blocked.
    pub fn is_blocked(&self, p: Point) -> bool {
        if p.x < 0 || p.y < 0 || p.x >= self.size.x || p.y >= self.size.y {
            return true;
        }
        self.blocked[(p.y * self.size.x + p.x) as usize]
    }

    /// Build a grid of the map's size whose walkability follows the map.
    pub fn build_grid(&self, node_size: f32, origin: Vec3) -> Result<Grid, GridError> {
        // The blocked predicate is called once per cell in row-major order,
        // which is also the order of `self.blocked`.
        let mut cells = self.blocked.iter().copied();
        Grid::build(
            self.size.x,
            self.size.y,
            node_size,
            origin,
            |_center, _radius| cells.next().unwrap_or(true),
        )
    }
}

/// Errors produced when parsing an [`AsciiMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No lines at all.
    Empty,
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// An unknown character, or a second `S` or `T`.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no content"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map: unexpected character '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw `grid` and the last search as text, one line per row.
///
/// Legend: `#` blocked, `.` free, `x` closed, `o` open, `*` path,
/// `S` start, `T` requested target, `@` substitute destination.
pub fn render(grid: &Grid, snapshot: &SearchSnapshot, start: Point, target: Point) -> String {
    let bounds = grid.bounds();
    let mut canvas: Vec<char> = grid
        .nodes()
        .iter()
        .map(|n| if n.is_walkable() { FREE } else { BLOCKED })
        .collect();

    let mut paint = |p: Point, ch: char| {
        if let Some(i) = bounds.index(p) {
            canvas[i] = ch;
        }
    };
    for &p in &snapshot.closed {
        paint(p, 'x');
    }
    for &p in &snapshot.open {
        paint(p, 'o');
    }
    for &p in &snapshot.path {
        paint(p, '*');
    }
    if let Some(fb) = &snapshot.fallback {
        paint(fb.substitute, '@');
    }
    paint(target, TARGET);
    paint(start, START);

    let width = grid.width() as usize;
    let mut out = String::with_capacity(canvas.len() + grid.height() as usize);
    for row in canvas.chunks(width) {
        out.extend(row);
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// An agent that follows paths through world space at a fixed speed.
#[derive(Debug, Clone)]
pub struct Navigator {
    position: Vec3,
    speed: f32,
    waypoints: Vec<Vec3>,
    next: usize,
}

impl Navigator {
    /// `speed` is in world units per second.
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            speed,
            waypoints: Vec::new(),
            next: 0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The cell the agent currently stands on.
    pub fn cell(&self, grid: &Grid) -> Point {
        grid.closest_node_to_world_position(self.position).pos()
    }

    /// Plan a path from the agent's cell to the cell containing
    /// `destination` and start following it.
    ///
    /// On error the agent keeps its previous route.
    pub fn travel_to(
        &mut self,
        search: &mut PathSearch,
        grid: &Grid,
        destination: Vec3,
    ) -> Result<Path, SearchError> {
        let start = self.cell(grid);
        let target = grid.node_from_world_position(destination).pos();
        let path = search.find_path(grid, start, target)?;
        if path.is_degraded() {
            log::info!(
                "navigator: {} unreachable, heading for {} instead",
                target,
                path.destination().unwrap_or(start)
            );
        } else {
            log::info!("navigator: {} steps to {}", path.len(), target);
        }
        self.waypoints = path.world_positions(grid);
        self.next = 0;
        Ok(path)
    }

    /// Advance along the route by `dt` seconds of travel. Returns `true`
    /// once the last waypoint has been reached.
    pub fn update(&mut self, dt: f32) -> bool {
        let mut budget = self.speed * dt;
        while budget > 0.0 {
            let Some(&wp) = self.waypoints.get(self.next) else {
                break;
            };
            let step = self.position.distance(wp).min(budget);
            self.position = self.position.move_towards(wp, step);
            budget -= step;
            if self.position == wp {
                log::trace!("navigator: reached waypoint {}", self.next);
                self.next += 1;
            }
        }
        self.is_arrived()
    }

    pub fn is_arrived(&self) -> bool {
        self.next >= self.waypoints.len()
    }

    /// Waypoints not yet reached.
    pub fn remaining(&self) -> &[Vec3] {
        &self.waypoints[self.next.min(self.waypoints.len())..]
    }
}
