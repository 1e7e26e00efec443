use trf_core::{derive_substream_seed, RngHandle};

/// Substream of the master seed that feeds field generation.
pub const FIELD_SUBSTREAM: u64 = 0;

/// Derives the deterministic seed of the field-generation stream.
pub fn field_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, FIELD_SUBSTREAM)
}

/// RNG positioned at the start of the field-generation stream.
pub fn field_rng(master_seed: u64) -> RngHandle {
    RngHandle::from_seed(field_seed(master_seed))
}
