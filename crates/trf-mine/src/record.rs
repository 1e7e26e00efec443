use serde::{Deserialize, Serialize};
use trf_graph::{Clique, FieldGraph};

use crate::derive::{derive_digest, work_value, Digest};

/// Result of a round in which a clique was discovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// One-based index of the round that produced the record.
    pub round: u64,
    /// Vertex count of the field searched in that round.
    pub vertex_count: usize,
    /// First clique of the target size in lexicographic order.
    pub clique: Clique,
    /// Complexity of the searched field.
    pub field_complexity: f64,
    /// Work value derived from the field complexity and the clique size.
    pub work_value: f64,
    /// Digest of the clique and work value.
    pub digest: Digest,
    /// Canonical hash of the searched field. Not an input of `digest`.
    pub graph_hash: String,
}

impl ResultRecord {
    /// Derives every field of the record from a discovered clique.
    pub fn derive(round: u64, field: &FieldGraph, clique: Clique, graph_hash: String) -> Self {
        let field_complexity = field.field_complexity();
        let work = work_value(field_complexity, clique.len());
        let digest = derive_digest(&clique, work);
        Self {
            round,
            vertex_count: field.vertex_count(),
            clique,
            field_complexity,
            work_value: work,
            digest,
            graph_hash,
        }
    }
}
