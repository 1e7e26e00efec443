#![deny(missing_docs)]

//! Mining loop for the TRF-Ramsey pipeline: grow a random field one vertex per
//! round, search it for a clique of fixed size and derive a digest from every
//! clique found.

/// YAML configuration schema and defaults.
pub mod config;
/// Work value and digest derivation.
pub mod derive;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Round loop and its state.
pub mod kernel;
/// Run manifest serialization helpers.
pub mod manifest;
/// Result records emitted by successful rounds.
pub mod record;
/// Output sinks for result records.
pub mod sink;
/// Digest re-derivation and seeded replay.
pub mod verify;

pub use config::{MineConfig, OutputConfig, SeedPolicy};
pub use derive::{derive_digest, digest_preimage, work_value, Digest, WORK_VALUE_PRECISION};
pub use kernel::{
    MineParams, MiningLoop, MiningState, RoundOutcome, RoundReport, RunSummary, StopHandle,
    StopReason,
};
pub use manifest::RunManifest;
pub use record::ResultRecord;
pub use sink::{load_records, read_records, JsonLinesSink, RecordSink};
pub use verify::{replay, replay_until, verify_digest, verify_replay};
