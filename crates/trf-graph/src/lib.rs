#![deny(missing_docs)]

//! Random field generation and exhaustive clique search for the TRF-Ramsey
//! pipeline.
//!
//! A field is a simple undirected graph whose edges are each present with
//! probability one half. Its complexity is the log-factorial of its edge count.
//! [`find_clique`] walks all k-subsets in lexicographic order and returns the
//! first complete one.

mod clique;
mod complexity;
mod generators;
mod graph;
mod hash;

pub use clique::{find_clique, first_clique, is_clique, Clique, CliqueSearch};
pub use complexity::{field_complexity, ln_factorial, ComplexityModel, STIRLING_THRESHOLD};
pub use generators::{generate, generate_with_model, EDGE_PROBABILITY};
pub use graph::FieldGraph;
pub use hash::canonical_hash;
