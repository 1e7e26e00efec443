use trf_core::errors::TrfError;
use trf_core::rng::RandomSource;

use crate::complexity::ComplexityModel;
use crate::graph::FieldGraph;

/// Probability with which each candidate edge is kept.
pub const EDGE_PROBABILITY: f64 = 0.5;

/// Generates a random field on `n` vertices with the default complexity model.
pub fn generate<R>(n: usize, rng: &mut R) -> Result<FieldGraph, TrfError>
where
    R: RandomSource + ?Sized,
{
    generate_with_model(n, ComplexityModel::default(), rng)
}

/// Generates a random field on `n` vertices.
///
/// Pairs `(i, j)` with `i < j` are visited row by row and each consumes exactly
/// one draw; the edge is kept when the draw exceeds [`EDGE_PROBABILITY`].
pub fn generate_with_model<R>(
    n: usize,
    model: ComplexityModel,
    rng: &mut R,
) -> Result<FieldGraph, TrfError>
where
    R: RandomSource + ?Sized,
{
    let mut graph = FieldGraph::blank(n, model)?;
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.next_unit() > EDGE_PROBABILITY {
                graph.insert_edge(i, j);
            }
        }
    }
    graph.refresh_complexity();
    Ok(graph)
}
