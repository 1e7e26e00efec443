use std::fmt;

use serde::{Deserialize, Serialize};
use trf_core::errors::{ErrorInfo, TrfError};

use crate::graph::FieldGraph;

/// Strictly increasing, non-empty list of vertex indices.
///
/// Serialized as a plain JSON array; deserialization re-checks the ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Clique(Vec<usize>);

impl Clique {
    /// Wraps `vertices`, rejecting empty or non-increasing lists.
    pub fn new(vertices: Vec<usize>) -> Result<Self, TrfError> {
        if vertices.is_empty() {
            return Err(TrfError::Graph(ErrorInfo::new(
                "empty-clique",
                "a clique needs at least one vertex",
            )));
        }
        if let Some(pair) = vertices.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(TrfError::Graph(
                ErrorInfo::new("unordered-clique", "clique vertices must be strictly increasing")
                    .with_context("pair", format!("({}, {})", pair[0], pair[1])),
            ));
        }
        Ok(Self(vertices))
    }

    /// Vertices in increasing order.
    pub fn vertices(&self) -> &[usize] {
        &self.0
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed clique; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether every pair of vertices is adjacent in `graph`.
    pub fn holds_in(&self, graph: &FieldGraph) -> bool {
        is_clique(graph, &self.0)
    }
}

/// Renders as `[v0, v1, ..., vk]`, the canonical text used by digest derivation.
impl fmt::Display for Clique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, vertex) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "]")
    }
}

impl TryFrom<Vec<usize>> for Clique {
    type Error = TrfError;

    fn try_from(vertices: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<Clique> for Vec<usize> {
    fn from(clique: Clique) -> Self {
        clique.0
    }
}

/// Outcome of an exhaustive clique search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueSearch {
    /// First clique in lexicographic order, if any exists.
    pub clique: Option<Clique>,
    /// Number of candidate subsets examined before the search stopped.
    pub subsets_tested: u64,
}

impl CliqueSearch {
    /// Returns whether a clique was found.
    pub fn is_found(&self) -> bool {
        self.clique.is_some()
    }
}

/// Searches `graph` for a clique of exactly `k` vertices.
///
/// Candidate subsets are enumerated in lexicographic order of ascending vertex
/// indices and the first complete one is returned, so the result is unique for
/// a given graph and `k`. Each candidate is abandoned at its first missing
/// edge; there is no other pruning. `k == 0` and `k > n` find nothing without
/// examining any subset.
pub fn find_clique(graph: &FieldGraph, k: usize) -> CliqueSearch {
    let n = graph.vertex_count();
    if k == 0 || k > n {
        return CliqueSearch {
            clique: None,
            subsets_tested: 0,
        };
    }

    let mut subset: Vec<usize> = (0..k).collect();
    let mut subsets_tested = 0u64;
    loop {
        subsets_tested += 1;
        if all_pairs_adjacent(graph, &subset) {
            return CliqueSearch {
                clique: Some(Clique(subset)),
                subsets_tested,
            };
        }
        if !next_combination(&mut subset, n) {
            return CliqueSearch {
                clique: None,
                subsets_tested,
            };
        }
    }
}

/// Shorthand for [`find_clique`] when the subset count is not needed.
pub fn first_clique(graph: &FieldGraph, k: usize) -> Option<Clique> {
    find_clique(graph, k).clique
}

/// Returns whether `vertices` is strictly increasing and pairwise adjacent in
/// `graph`.
pub fn is_clique(graph: &FieldGraph, vertices: &[usize]) -> bool {
    if vertices.windows(2).any(|pair| pair[0] >= pair[1]) {
        return false;
    }
    if vertices.iter().any(|&v| v >= graph.vertex_count()) {
        return false;
    }
    all_pairs_adjacent(graph, vertices)
}

fn all_pairs_adjacent(graph: &FieldGraph, vertices: &[usize]) -> bool {
    for (idx, &u) in vertices.iter().enumerate() {
        for &v in &vertices[idx + 1..] {
            if !graph.has_edge(u, v) {
                return false;
            }
        }
    }
    true
}

/// Advances `subset` to the next k-combination of `0..n` in lexicographic
/// order. Returns false once the last combination has been passed.
fn next_combination(subset: &mut [usize], n: usize) -> bool {
    let k = subset.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if subset[i] < n - k + i {
            subset[i] += 1;
            for j in (i + 1)..k {
                subset[j] = subset[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
