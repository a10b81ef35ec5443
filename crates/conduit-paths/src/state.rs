use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::node::Node;

// ---------------------------------------------------------------------------
// Frontier entry for priority-queue searches
// ---------------------------------------------------------------------------

/// A node waiting in the frontier, ordered for use in `BinaryHeap`.
///
/// Lower `f` pops first. Among equal `f`, the deeper node (higher `g`) pops
/// first, then the one pushed earliest.
#[derive(Clone, Debug)]
pub(crate) struct FrontierEntry<N> {
    pub(crate) node: N,
    pub(crate) f: f64,
    pub(crate) g: f64,
    pub(crate) seq: u64,
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse on f and seq so the max-heap pops the smallest first.
        other
            .f
            .total_cmp(&self.f)
            .then(self.g.total_cmp(&other.g))
            .then(other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Bookkeeping for one in-flight search.
///
/// Owned by a single search instance. Traversal policies receive a shared
/// reference and may inspect it, but only the search mutates it.
///
/// Invariants kept between expansions:
/// - every open node has a g-score and an f-score;
/// - no node is open and closed at the same time.
#[derive(Debug, Clone)]
pub struct SearchState<N: Node> {
    goal: N,
    open: HashSet<N>,
    closed: HashSet<N>,
    came_from: HashMap<N, N>,
    g_score: HashMap<N, f64>,
    f_score: HashMap<N, f64>,
    frontier: BinaryHeap<FrontierEntry<N>>,
    seq: u64,
    visits: usize,
}

impl<N: Node> SearchState<N> {
    pub(crate) fn new(goal: N) -> Self {
        Self {
            goal,
            open: HashSet::new(),
            closed: HashSet::new(),
            came_from: HashMap::new(),
            g_score: HashMap::new(),
            f_score: HashMap::new(),
            frontier: BinaryHeap::new(),
            seq: 0,
            visits: 0,
        }
    }

    /// Drop everything except the goal.
    pub(crate) fn clear(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.came_from.clear();
        self.g_score.clear();
        self.f_score.clear();
        self.frontier.clear();
        self.seq = 0;
        self.visits = 0;
    }

    /// The node this search is trying to reach.
    #[inline]
    pub fn goal(&self) -> &N {
        &self.goal
    }

    /// Whether `node` is waiting in the open set.
    #[inline]
    pub fn is_open(&self, node: &N) -> bool {
        self.open.contains(node)
    }

    /// Whether `node` has been expanded and closed.
    #[inline]
    pub fn is_closed(&self, node: &N) -> bool {
        self.closed.contains(node)
    }

    /// Best known cost from the start to `node`.
    #[inline]
    pub fn g_score(&self, node: &N) -> Option<f64> {
        self.g_score.get(node).copied()
    }

    /// Priority of `node`: its g-score plus the strategy's estimate.
    #[inline]
    pub fn f_score(&self, node: &N) -> Option<f64> {
        self.f_score.get(node).copied()
    }

    /// Predecessor of `node` on the best path found so far.
    #[inline]
    pub fn came_from(&self, node: &N) -> Option<&N> {
        self.came_from.get(node)
    }

    /// Number of open nodes.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Number of closed nodes.
    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Number of nodes taken from the frontier so far, vetoed ones included.
    #[inline]
    pub fn visits(&self) -> usize {
        self.visits
    }

    // -----------------------------------------------------------------------
    // Mutation, used by the strategies
    // -----------------------------------------------------------------------

    /// Open `node` with the given scores, reopening it if it was closed, and
    /// push it onto the priority frontier.
    pub(crate) fn open_node(&mut self, node: N, g: f64, f: f64, parent: Option<N>) {
        self.mark_open(node.clone(), g, f, parent);
        self.seq += 1;
        self.frontier.push(FrontierEntry {
            node,
            f,
            g,
            seq: self.seq,
        });
    }

    /// Record `node` as open with the given scores without queueing it.
    /// Strategies with their own queue use this together with
    /// [`note_visit`](Self::note_visit).
    pub(crate) fn mark_open(&mut self, node: N, g: f64, f: f64, parent: Option<N>) {
        if let Some(parent) = parent {
            self.came_from.insert(node.clone(), parent);
        }
        self.closed.remove(&node);
        self.g_score.insert(node.clone(), g);
        self.f_score.insert(node.clone(), f);
        self.open.insert(node);
    }

    /// Count one node taken from a strategy's own queue.
    #[inline]
    pub(crate) fn note_visit(&mut self) {
        self.visits += 1;
    }

    /// Pop the open node with the best priority, skipping stale entries.
    /// Returns the node with its current g-score.
    pub(crate) fn pop_best(&mut self) -> Option<(N, f64)> {
        while let Some(entry) = self.frontier.pop() {
            // An improved path pushes a fresh entry with a strictly lower g;
            // older entries for the same node no longer match.
            if !self.open.contains(&entry.node) || self.g_score.get(&entry.node) != Some(&entry.g) {
                continue;
            }
            self.visits += 1;
            return Some((entry.node, entry.g));
        }
        None
    }

    /// Move `node` from the open set to the closed set.
    pub(crate) fn close(&mut self, node: &N) {
        self.open.remove(node);
        self.closed.insert(node.clone());
    }

    /// Walk `came_from` back from `end` and return the nodes in start → end
    /// order.
    pub(crate) fn reconstruct(&self, end: &N) -> Vec<N> {
        let mut path = vec![end.clone()];
        let mut cur = end;
        // A well-formed predecessor tree is at most `came_from.len()` deep.
        for _ in 0..self.came_from.len() {
            let Some(prev) = self.came_from.get(cur) else {
                break;
            };
            path.push(prev.clone());
            cur = prev;
        }
        debug_assert!(
            !self.came_from.contains_key(cur),
            "cycle in predecessor map"
        );
        path.reverse();
        path
    }
}
