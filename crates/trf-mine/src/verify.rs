use std::collections::BTreeMap;

use trf_core::errors::{ErrorInfo, TrfError};

use crate::derive::{derive_digest, render_work_value, work_value};
use crate::kernel::{MineParams, MiningLoop};
use crate::record::ResultRecord;

/// Re-derives the work value and digest of `record` from its own fields.
pub fn verify_digest(record: &ResultRecord) -> Result<(), TrfError> {
    let expected_work = work_value(record.field_complexity, record.clique.len());
    if render_work_value(expected_work) != render_work_value(record.work_value) {
        return Err(TrfError::Verify(
            ErrorInfo::new(
                "work-value-mismatch",
                "work value does not follow from field complexity",
            )
            .with_context("round", record.round)
            .with_context("expected", render_work_value(expected_work))
            .with_context("recorded", render_work_value(record.work_value)),
        ));
    }
    let digest = derive_digest(&record.clique, record.work_value);
    if digest != record.digest {
        return Err(TrfError::Verify(
            ErrorInfo::new("digest-mismatch", "digest does not match clique and work value")
                .with_context("round", record.round)
                .with_context("expected", digest)
                .with_context("recorded", record.digest),
        ));
    }
    Ok(())
}

/// Re-runs a seeded loop through `last_round` and returns every record it
/// emits, keyed by round.
pub fn replay_until(
    params: MineParams,
    master_seed: u64,
    last_round: u64,
) -> Result<BTreeMap<u64, ResultRecord>, TrfError> {
    let params = MineParams {
        max_rounds: Some(last_round),
        ..params
    };
    let mut mining = MiningLoop::seeded(params, master_seed)?;
    let mut records: Vec<ResultRecord> = Vec::new();
    mining.run(&mut records)?;
    Ok(records.into_iter().map(|record| (record.round, record)).collect())
}

/// Record emitted by `target_round` of a seeded run, if that round found a clique.
pub fn replay(
    params: MineParams,
    master_seed: u64,
    target_round: u64,
) -> Result<Option<ResultRecord>, TrfError> {
    if target_round == 0 {
        return Err(TrfError::Verify(ErrorInfo::new(
            "round-out-of-range",
            "rounds are numbered from one",
        )));
    }
    let mut records = replay_until(params, master_seed, target_round)?;
    Ok(records.remove(&target_round))
}

/// Checks every record's digest and that a seeded replay rediscovers it
/// unchanged. Returns the number of records checked.
pub fn verify_replay(
    params: MineParams,
    master_seed: u64,
    records: &[ResultRecord],
) -> Result<usize, TrfError> {
    for record in records {
        verify_digest(record)?;
        if record.round == 0 {
            return Err(TrfError::Verify(ErrorInfo::new(
                "round-out-of-range",
                "rounds are numbered from one",
            )));
        }
    }
    let Some(last_round) = records.iter().map(|record| record.round).max() else {
        return Ok(0);
    };
    let replayed = replay_until(params, master_seed, last_round)?;
    for record in records {
        match replayed.get(&record.round) {
            Some(expected) if expected == record => {}
            Some(expected) => {
                return Err(TrfError::Verify(
                    ErrorInfo::new("replay-mismatch", "replayed round produced a different record")
                        .with_context("round", record.round)
                        .with_context("expected_digest", expected.digest)
                        .with_context("recorded_digest", record.digest),
                ));
            }
            None => {
                return Err(TrfError::Verify(
                    ErrorInfo::new("replay-not-found", "replayed round found no clique")
                        .with_context("round", record.round)
                        .with_hint("check the master seed and run parameters"),
                ));
            }
        }
    }
    Ok(records.len())
}
