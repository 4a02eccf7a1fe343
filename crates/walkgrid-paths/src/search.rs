use std::collections::BinaryHeap;

use walkgrid_core::{Grid, Point, Range};

use crate::config::SearchConfig;
use crate::snapshot::SearchSnapshot;

/// Parent of the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal per-cell search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    Open,
    Closed,
}

/// Search bookkeeping for one cell. Only meaningful when `generation`
/// matches the engine's current generation; anything else reads as
/// "not yet discovered by this attempt".
#[derive(Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: f32,
    pub(crate) h: f32,
    pub(crate) f: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) state: NodeState,
    /// Discovery rank within the attempt; breaks `f` ties.
    pub(crate) order: u32,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: NO_PARENT,
            generation: 0,
            state: NodeState::Open,
            order: 0,
        }
    }
}

/// Open-set entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// lowest `f` first and, among equal `f`, the earliest discovered node.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f32,
    pub(crate) order: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// A* search engine with closest-reachable fallback.
///
/// `PathSearch` owns all scratch state (per-cell costs, open heap, closed
/// list) so that repeated queries incur no allocations after the first use.
/// Scratch cells are stamped with a generation that is bumped on every
/// attempt, so nothing from a previous search is ever read back.
///
/// Searching takes `&mut self`: one engine serves one search at a time.
/// Independent engines can search the same [`Grid`] concurrently.
pub struct PathSearch {
    pub(crate) rng: Range,
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    // cells discovered by the current attempt, in discovery order
    pub(crate) discovered: Vec<usize>,
    // cells finalized by the current attempt, in expansion order
    pub(crate) closed: Vec<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
    pub(crate) last: SearchSnapshot,
}

impl PathSearch {
    /// Create a new engine for the given grid rectangle.
    pub fn new(rng: Range, config: SearchConfig) -> Self {
        Self {
            rng,
            config,
            nodes: vec![SearchNode::default(); rng.len()],
            generation: 0,
            open: BinaryHeap::new(),
            discovered: Vec::new(),
            closed: Vec::new(),
            nbuf: Vec::with_capacity(8),
            last: SearchSnapshot::default(),
        }
    }

    /// Create an engine covering all of `grid`.
    pub fn for_grid(grid: &Grid, config: SearchConfig) -> Self {
        Self::new(grid.bounds(), config)
    }

    /// Replace the underlying range.
    ///
    /// Scratch capacity is kept when the new range fits; stale entries are
    /// ignored thanks to the generation stamp.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        if new_len > self.nodes.len() {
            self.nodes.resize(new_len, SearchNode::default());
        }
        self.next_generation();
        self.last.clear();
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Open set, closed set and path of the most recent search.
    #[inline]
    pub fn last_search(&self) -> &SearchSnapshot {
        &self.last
    }

    /// Start a new attempt, invalidating all scratch cells.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could collide with the new ones.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathSearch {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.rng, self.config).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathSearch {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (range, config) = <(Range, SearchConfig)>::deserialize(deserializer)?;
        Ok(PathSearch::new(range, config))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathsearch_round_trip() {
        let rng = Range::new(1, 2, 10, 20);
        let config = SearchConfig::default().with_fallback_candidates(4);
        let ps = PathSearch::new(rng, config);
        let json = serde_json::to_string(&ps).unwrap();
        let back: PathSearch = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range(), rng);
        assert_eq!(back.config(), &config);
        // Scratch is freshly initialized, not serialized.
        assert_eq!(back.generation, 0);
        assert_eq!(back.nodes.len(), rng.len());
    }
}
