use crate::node::Node;

/// An ordered route from a start node to a goal node.
///
/// A path always holds at least one node. When start and goal coincide it
/// holds exactly that node and costs 0. Deserialization rejects documents
/// that break this, or that carry a negative or non-finite cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path<N> {
    nodes: Vec<N>,
    cost: f64,
}

impl<N: Node> Path<N> {
    pub(crate) fn new(nodes: Vec<N>, cost: f64) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, cost }
    }

    /// Build a path from its nodes, summing the edge distances.
    ///
    /// Returns `None` for an empty node list.
    pub fn from_nodes(nodes: Vec<N>) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }
        let cost = nodes.windows(2).map(|w| w[0].distance(&w[1])).sum();
        Some(Self { nodes, cost })
    }

    /// Nodes from start to goal, both included.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes, endpoints included.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of steps taken (one less than the node count).
    #[inline]
    pub fn steps(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Total edge cost along the path.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// First node.
    #[inline]
    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    /// Last node.
    #[inline]
    pub fn goal(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Whether `node` lies on the path.
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }

    #[inline]
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

#[cfg(feature = "serde")]
impl<'de, N: serde::Deserialize<'de>> serde::Deserialize<'de> for Path<N> {
    fn deserialize<D: serde::Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        #[serde(rename = "Path")]
        struct Raw<N> {
            nodes: Vec<N>,
            cost: f64,
        }

        let Raw { nodes, cost } = <Raw<N> as serde::Deserialize>::deserialize(de)?;
        if nodes.is_empty() {
            return Err(D::Error::invalid_length(0, &"at least one node"));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(D::Error::custom(format_args!("invalid path cost {cost}")));
        }
        Ok(Self { nodes, cost })
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchOutcome<N> {
    /// The goal was reached.
    Found(Path<N>),
    /// Every reachable node was expanded without reaching the goal.
    NoPath,
    /// The traversal policy vetoed the search when visiting `at`.
    Aborted { at: N },
}

impl<N> SearchOutcome<N> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        matches!(self, SearchOutcome::Aborted { .. })
    }

    /// The path, if one was found.
    #[inline]
    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    #[inline]
    pub fn into_path(self) -> Option<Path<N>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

impl<N: std::fmt::Display> std::fmt::Display for SearchOutcome<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Found(path) => {
                write!(f, "found {} nodes, cost {:.3}", path.nodes.len(), path.cost)
            }
            SearchOutcome::NoPath => f.write_str("no path"),
            SearchOutcome::Aborted { at } => write!(f, "aborted at {at}"),
        }
    }
}
