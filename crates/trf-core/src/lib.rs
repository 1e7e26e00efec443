#![deny(missing_docs)]
#![doc = "Core error, randomness and provenance types for the TRF-Ramsey discover-then-derive pipeline."]

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, TrfError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, ConstantSource, RandomSource, RngHandle};
