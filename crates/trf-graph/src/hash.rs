use sha2::{Digest, Sha256};

use crate::graph::FieldGraph;

/// Computes the canonical structural hash for the provided field.
///
/// The encoding covers the vertex count and the sorted edge list only; the
/// complexity model does not participate.
pub fn canonical_hash(graph: &FieldGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"trf-field:v1");
    hasher.update((graph.vertex_count() as u64).to_le_bytes());
    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for (u, v) in graph.edges() {
        hasher.update((u as u64).to_le_bytes());
        hasher.update((v as u64).to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
