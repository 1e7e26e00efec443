use trf_core::errors::{ErrorInfo, TrfError};

use crate::complexity::ComplexityModel;

const WORD_BITS: usize = 64;

/// Simple undirected graph over vertices `0..n` with a cached field complexity.
///
/// Adjacency is stored as one neighbour bitset per vertex; every edge is set in
/// both rows so the relation is symmetric by construction. Self-loops are never
/// stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGraph {
    vertex_count: usize,
    words_per_row: usize,
    rows: Vec<u64>,
    edge_count: usize,
    model: ComplexityModel,
    field_complexity: f64,
}

impl FieldGraph {
    /// Creates a graph with `n` vertices and no edges.
    pub fn empty(n: usize) -> Result<Self, TrfError> {
        Self::blank(n, ComplexityModel::default())
    }

    /// Creates the complete graph on `n` vertices.
    pub fn complete(n: usize) -> Result<Self, TrfError> {
        let mut graph = Self::blank(n, ComplexityModel::default())?;
        for u in 0..n {
            for v in (u + 1)..n {
                graph.insert_edge(u, v);
            }
        }
        graph.refresh_complexity();
        Ok(graph)
    }

    /// Builds a graph from an explicit edge list.
    ///
    /// Duplicate pairs (in either orientation) collapse into a single edge.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, TrfError> {
        let mut graph = Self::blank(n, ComplexityModel::default())?;
        for &(u, v) in edges {
            if u == v {
                return Err(TrfError::Graph(
                    ErrorInfo::new("self-loop", "simple graphs cannot contain self-loops")
                        .with_context("vertex", u),
                ));
            }
            if u >= n || v >= n {
                return Err(TrfError::Graph(
                    ErrorInfo::new("vertex-out-of-range", "edge endpoint exceeds vertex count")
                        .with_context("edge", format!("({u}, {v})"))
                        .with_context("vertex_count", n),
                ));
            }
            graph.insert_edge(u, v);
        }
        graph.refresh_complexity();
        Ok(graph)
    }

    pub(crate) fn blank(n: usize, model: ComplexityModel) -> Result<Self, TrfError> {
        if n == 0 {
            return Err(TrfError::Graph(
                ErrorInfo::new("empty-graph", "a field requires at least one vertex")
                    .with_hint("start mining with a positive vertex count"),
            ));
        }
        let words_per_row = n.div_ceil(WORD_BITS);
        Ok(Self {
            vertex_count: n,
            words_per_row,
            rows: vec![0; n * words_per_row],
            edge_count: 0,
            model,
            field_complexity: 0.0,
        })
    }

    /// Sets the edge `{u, v}`; callers guarantee `u != v` and both are in range.
    pub(crate) fn insert_edge(&mut self, u: usize, v: usize) {
        if self.has_edge(u, v) {
            return;
        }
        self.set_bit(u, v);
        self.set_bit(v, u);
        self.edge_count += 1;
    }

    pub(crate) fn refresh_complexity(&mut self) {
        self.field_complexity = self.model.field_complexity(self.edge_count);
    }

    fn set_bit(&mut self, row: usize, column: usize) {
        let index = row * self.words_per_row + column / WORD_BITS;
        self.rows[index] |= 1u64 << (column % WORD_BITS);
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Field complexity derived from the edge count when the graph was built.
    pub fn field_complexity(&self) -> f64 {
        self.field_complexity
    }

    /// Returns whether `{u, v}` is an edge. Out-of-range vertices and
    /// self-pairs are never adjacent.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        if u >= self.vertex_count || v >= self.vertex_count || u == v {
            return false;
        }
        let word = self.rows[u * self.words_per_row + v / WORD_BITS];
        (word >> (v % WORD_BITS)) & 1 == 1
    }

    /// Number of neighbours of `v` (zero when `v` is out of range).
    pub fn degree(&self, v: usize) -> usize {
        if v >= self.vertex_count {
            return 0;
        }
        self.row(v).iter().map(|word| word.count_ones() as usize).sum()
    }

    fn row(&self, v: usize) -> &[u64] {
        let start = v * self.words_per_row;
        &self.rows[start..start + self.words_per_row]
    }

    /// Iterates over every edge as `(u, v)` with `u < v`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count).flat_map(move |u| {
            ((u + 1)..self.vertex_count)
                .filter(move |&v| self.has_edge(u, v))
                .map(move |v| (u, v))
        })
    }
}
