use walkgrid_core::Point;

use crate::error::SearchError;
use crate::path::Path;
use crate::search::{NO_PARENT, NodeRef, NodeState, PathSearch};
use crate::snapshot::{Candidate, Fallback};
use crate::traits::AstarPather;

impl PathSearch {
    /// Compute a path from `start` to `target` using A*.
    ///
    /// The returned [`Path`] excludes `start` and ends at `target`. If
    /// `target` cannot be reached (or is not walkable), the search falls
    /// back once: among the explored nodes nearest to `target` it picks the
    /// one with the lowest `f` and returns a path to it instead, marked
    /// degraded. When that node is `start` itself the degraded path is
    /// empty.
    ///
    /// `start == target` yields an empty path.
    pub fn find_path<P: AstarPather>(
        &mut self,
        pather: &P,
        start: Point,
        target: Point,
    ) -> Result<Path, SearchError> {
        self.last.clear();
        let start_idx = self.rng.index(start).ok_or(SearchError::OutOfBounds(start))?;
        let goal_idx = self.rng.index(target).ok_or(SearchError::OutOfBounds(target))?;

        if start_idx == goal_idx {
            return Ok(Path::new(start, Vec::new(), target, 0.0));
        }

        let path = if self.attempt(pather, start_idx, goal_idx)? {
            self.reconstruct(start_idx, goal_idx, target)
        } else {
            self.fall_back(pather, start_idx, target)?
        };

        log::debug!(
            "path {} -> {}: {} steps, cost {:.3}, {} expansions{}",
            start,
            target,
            path.len(),
            path.cost(),
            self.last.expansions,
            if path.is_degraded() { " (degraded)" } else { "" }
        );
        Ok(path)
    }

    /// One A* run. Returns whether `goal_idx` was reached; on `false` the
    /// closed list holds everything reachable from the start.
    fn attempt<P: AstarPather>(
        &mut self,
        pather: &P,
        start_idx: usize,
        goal_idx: usize,
    ) -> Result<bool, SearchError> {
        let cur_gen = self.next_generation();
        let target = self.rng.point(goal_idx);
        let start = self.rng.point(start_idx);

        self.open.clear();
        self.discovered.clear();
        self.closed.clear();

        // Initialise the start node.
        {
            let h = pather.estimate(start, target);
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.h = h;
            node.f = h;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.state = NodeState::Open;
            node.order = 0;
        }
        self.discovered.push(start_idx);
        self.open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            order: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut next_order = 1u32;
        let mut expansions = 0usize;

        let result = loop {
            let Some(current) = self.open.pop() else {
                break Ok(false);
            };
            let ci = current.idx;

            // Skip entries superseded by a cheaper route or already closed.
            let node = &self.nodes[ci];
            if node.state != NodeState::Open || node.f.to_bits() != current.f.to_bits() {
                continue;
            }

            if ci == goal_idx {
                break Ok(true);
            }

            if expansions >= self.config.max_expansions {
                break Err(SearchError::IterationLimit {
                    limit: self.config.max_expansions,
                });
            }
            expansions += 1;

            self.nodes[ci].state = NodeState::Closed;
            self.closed.push(ci);
            let current_g = self.nodes[ci].g;
            let current_point = self.rng.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.rng.index(np) else {
                    continue;
                };
                let seen = self.nodes[ni].generation == cur_gen;
                if seen && self.nodes[ni].state == NodeState::Closed {
                    continue;
                }
                if !pather.walkable(np) {
                    continue;
                }
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.nodes[ni];
                if !seen {
                    n.generation = cur_gen;
                    n.state = NodeState::Open;
                    n.order = next_order;
                    next_order += 1;
                    self.discovered.push(ni);
                } else if tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.h = pather.estimate(np, target);
                n.f = tentative_g + n.h;
                n.parent = ci;

                self.open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    order: n.order,
                });
            }
        };

        self.nbuf = nbuf;
        self.record_sets(expansions);
        log::trace!(
            "attempt {} -> {}: {} expanded, {} discovered, reached: {:?}",
            start,
            target,
            expansions,
            self.discovered.len(),
            result
        );
        result
    }

    /// Choose a substitute among the explored nodes and search again, once.
    fn fall_back<P: AstarPather>(
        &mut self,
        pather: &P,
        start_idx: usize,
        target: Point,
    ) -> Result<Path, SearchError> {
        let start = self.rng.point(start_idx);
        let no_path = SearchError::NoPathAvailable { start, target };
        // The start is always expanded first; nothing else means it is boxed in.
        if !self.config.allow_fallback || self.closed.len() <= 1 {
            return Err(no_path);
        }

        let mut candidates: Vec<(usize, Candidate)> = self
            .closed
            .iter()
            .map(|&i| {
                let pos = self.rng.point(i);
                let candidate = Candidate {
                    pos,
                    distance: pather.distance(pos, target),
                    f: self.nodes[i].f,
                };
                (i, candidate)
            })
            .collect();
        // Stable: equally distant nodes keep expansion order.
        candidates.sort_by(|a, b| a.1.distance.total_cmp(&b.1.distance));
        candidates.truncate(self.config.fallback_candidates);

        let Some(&(sub_idx, best)) = candidates
            .iter()
            .reduce(|best, c| if c.1.f < best.1.f { c } else { best })
        else {
            return Err(no_path);
        };

        log::warn!(
            "no path from {} to {}, falling back to nearest reachable node {}",
            start,
            target,
            best.pos
        );

        let explored = self.last.closed.clone();
        let path = if sub_idx == start_idx {
            // Staying put is closest; the snapshot keeps the exhausted attempt.
            Path::new(start, Vec::new(), target, 0.0)
        } else {
            if !self.attempt(pather, start_idx, sub_idx)? {
                // The substitute was expanded from `start` a moment ago.
                return Err(no_path);
            }
            self.reconstruct(start_idx, sub_idx, target)
        };
        self.last.fallback = Some(Fallback {
            requested: target,
            substitute: best.pos,
            explored,
            candidates: candidates.into_iter().map(|(_, c)| c).collect(),
        });
        Ok(path)
    }

    /// Walk parents back from `end_idx`, excluding the start.
    fn reconstruct(&mut self, start_idx: usize, end_idx: usize, requested: Point) -> Path {
        let mut steps = Vec::new();
        let mut ci = end_idx;
        while ci != start_idx && ci != NO_PARENT {
            steps.push(self.rng.point(ci));
            ci = self.nodes[ci].parent;
        }
        steps.reverse();
        self.last.path.clone_from(&steps);
        Path::new(self.rng.point(start_idx), steps, requested, self.nodes[end_idx].g)
    }

    fn record_sets(&mut self, expansions: usize) {
        let rng = self.rng;
        self.last.expansions += expansions;
        self.last.open.clear();
        self.last.open.extend(
            self.discovered
                .iter()
                .filter(|&&i| self.nodes[i].state == NodeState::Open)
                .map(|&i| rng.point(i)),
        );
        self.last.closed.clear();
        self.last
            .closed
            .extend(self.closed.iter().map(|&i| rng.point(i)));
    }
}
