//! Read-only views of the last search, for debug rendering.

use walkgrid_core::Point;

/// What the most recent [`find_path`](crate::PathSearch::find_path) call did.
///
/// When a fallback happened, `open`, `closed` and `expansions` describe the
/// second attempt towards the substitute; the exhausted first attempt is
/// summarised in [`SearchSnapshot::fallback`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSnapshot {
    /// Frontier left when the search stopped, in discovery order.
    pub open: Vec<Point>,
    /// Finalized nodes, in expansion order.
    pub closed: Vec<Point>,
    /// The returned path (start excluded), empty on failure or when the
    /// start itself was the best substitute.
    pub path: Vec<Point>,
    /// Node expansions across all attempts of the call.
    pub expansions: usize,
    pub fallback: Option<Fallback>,
}

impl SearchSnapshot {
    pub(crate) fn clear(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.path.clear();
        self.expansions = 0;
        self.fallback = None;
    }
}

/// How a substitute destination was chosen for an unreachable target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fallback {
    pub requested: Point,
    pub substitute: Point,
    /// Closed set of the exhausted attempt, in expansion order.
    pub explored: Vec<Point>,
    /// Explored nodes nearest to the requested target (start included),
    /// nearest first. The substitute is the one with the lowest `f`.
    pub candidates: Vec<Candidate>,
}

/// One substitute candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub pos: Point,
    /// Straight-line distance to the requested target.
    pub distance: f32,
    /// `g + h` recorded for this node by the exhausted attempt.
    pub f: f32,
}
