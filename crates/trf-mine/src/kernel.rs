use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use trf_core::errors::{ErrorInfo, TrfError};
use trf_core::rng::{RandomSource, RngHandle};
use trf_graph::{canonical_hash, find_clique, generate_with_model, ComplexityModel};

use crate::derive::Digest;
use crate::determinism;
use crate::record::ResultRecord;
use crate::sink::RecordSink;

/// Validated parameters of a mining loop. Fixed for the loop's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineParams {
    /// Vertex count of the first field.
    pub initial_vertices: usize,
    /// Clique size searched for in every round.
    pub target_clique: usize,
    /// Optional number of rounds after which [`MiningLoop::run`] returns.
    pub max_rounds: Option<u64>,
    /// Complexity model applied to each generated field.
    pub complexity: ComplexityModel,
}

impl Default for MineParams {
    fn default() -> Self {
        Self::new(20, 4)
    }
}

impl MineParams {
    /// Unbounded parameters with the default complexity model.
    pub fn new(initial_vertices: usize, target_clique: usize) -> Self {
        Self {
            initial_vertices,
            target_clique,
            max_rounds: None,
            complexity: ComplexityModel::default(),
        }
    }

    /// Caps the number of rounds executed by [`MiningLoop::run`].
    pub fn with_max_rounds(mut self, max_rounds: u64) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Selects the complexity model.
    pub fn with_complexity(mut self, complexity: ComplexityModel) -> Self {
        self.complexity = complexity;
        self
    }

    /// Rejects parameters under which no round may run.
    pub fn validate(&self) -> Result<(), TrfError> {
        if self.initial_vertices == 0 {
            return Err(TrfError::Config(ErrorInfo::new(
                "zero-initial-vertices",
                "initial vertex count must be positive",
            )));
        }
        if self.target_clique == 0 {
            return Err(TrfError::Config(ErrorInfo::new(
                "zero-clique-size",
                "target clique size must be positive",
            )));
        }
        if self.target_clique > self.initial_vertices {
            return Err(TrfError::Config(
                ErrorInfo::new(
                    "clique-exceeds-field",
                    "target clique size exceeds the initial vertex count",
                )
                .with_context("target_clique", self.target_clique)
                .with_context("initial_vertices", self.initial_vertices),
            ));
        }
        Ok(())
    }
}

/// State carried between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningState {
    /// Vertex count of the next field to be generated.
    pub vertex_count: usize,
    /// Number of completed rounds.
    pub round: u64,
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum RoundOutcome {
    /// A clique was found and its record handed to the sink.
    Found {
        /// Digest of the emitted record.
        digest: Digest,
    },
    /// The field holds no clique of the target size.
    NotFound,
}

/// Diagnostics describing one completed round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// One-based round index.
    pub round: u64,
    /// Vertex count of the searched field.
    pub vertex_count: usize,
    /// Edge count of the searched field.
    pub edge_count: usize,
    /// Complexity of the searched field.
    pub field_complexity: f64,
    /// Candidate subsets examined by the clique search.
    pub subsets_tested: u64,
    /// Canonical hash of the searched field.
    pub graph_hash: String,
    /// Whether the round emitted a record.
    pub outcome: RoundOutcome,
}

/// Why [`MiningLoop::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    /// The configured round cap was reached.
    RoundCap,
    /// A [`StopHandle`] requested the stop.
    StopRequested,
}

/// Aggregate statistics returned when a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Rounds completed during this call.
    pub rounds: u64,
    /// Records handed to the sink during this call.
    pub records_emitted: u64,
    /// Loop state after the last completed round.
    pub final_state: MiningState,
    /// Reason the run ended.
    pub stop_reason: StopReason,
}

/// Cloneable flag used to stop a running loop from outside.
///
/// The loop reads it before each round, so a round that has started always
/// completes, derivation included.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Requests the loop to stop at the next round boundary.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Generate, search and derive, one round at a time, growing the field by one
/// vertex after every round.
#[derive(Debug)]
pub struct MiningLoop<R> {
    params: MineParams,
    state: MiningState,
    rng: R,
    stop: StopHandle,
}

impl MiningLoop<RngHandle> {
    /// Loop driven by the field substream of `master_seed`.
    pub fn seeded(params: MineParams, master_seed: u64) -> Result<Self, TrfError> {
        Self::new(params, determinism::field_rng(master_seed))
    }
}

impl<R: RandomSource> MiningLoop<R> {
    /// Validates `params` and prepares the first round.
    pub fn new(params: MineParams, rng: R) -> Result<Self, TrfError> {
        params.validate()?;
        Ok(Self {
            params,
            state: MiningState {
                vertex_count: params.initial_vertices,
                round: 0,
            },
            rng,
            stop: StopHandle::default(),
        })
    }

    /// Parameters fixed at construction.
    pub fn params(&self) -> &MineParams {
        &self.params
    }

    /// Current state.
    pub fn state(&self) -> MiningState {
        self.state
    }

    /// Handle that stops [`MiningLoop::run`] at the next round boundary.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Runs one round and hands its record, if any, to `sink`.
    ///
    /// The vertex count and round counter advance by one whatever the outcome,
    /// including a sink failure. The failed round's record is lost and the
    /// returned error names it under `lost_round`, so a later round still
    /// matches a seeded replay.
    pub fn step<S>(&mut self, sink: &mut S) -> Result<RoundReport, TrfError>
    where
        S: RecordSink + ?Sized,
    {
        let round = self.state.round + 1;
        let n = self.state.vertex_count;
        let field = generate_with_model(n, self.params.complexity, &mut self.rng)?;
        let search = find_clique(&field, self.params.target_clique);
        let graph_hash = canonical_hash(&field);

        self.state = MiningState {
            vertex_count: n + 1,
            round,
        };

        let outcome = match search.clique {
            Some(clique) => {
                let record = ResultRecord::derive(round, &field, clique, graph_hash.clone());
                let digest = record.digest;
                tracing::info!(
                    round,
                    vertex_count = n,
                    clique = %record.clique,
                    work_value = record.work_value,
                    %digest,
                    "clique discovered"
                );
                sink.accept(record).map_err(|err| {
                    tracing::warn!(round, %digest, "sink rejected record");
                    err.with_context("lost_round", round)
                })?;
                RoundOutcome::Found { digest }
            }
            None => RoundOutcome::NotFound,
        };

        tracing::debug!(
            round,
            vertex_count = n,
            edge_count = field.edge_count(),
            field_complexity = field.field_complexity(),
            subsets_tested = search.subsets_tested,
            found = matches!(outcome, RoundOutcome::Found { .. }),
            "round complete"
        );

        Ok(RoundReport {
            round,
            vertex_count: n,
            edge_count: field.edge_count(),
            field_complexity: field.field_complexity(),
            subsets_tested: search.subsets_tested,
            graph_hash,
            outcome,
        })
    }

    /// Runs rounds until the round cap is reached or a stop is requested.
    pub fn run<S>(&mut self, sink: &mut S) -> Result<RunSummary, TrfError>
    where
        S: RecordSink + ?Sized,
    {
        self.run_with(sink, |_| {})
    }

    /// Like [`MiningLoop::run`], calling `on_round` after every completed round.
    ///
    /// Drivers use the callback for progress output and pacing; the loop itself
    /// never waits.
    pub fn run_with<S, F>(&mut self, sink: &mut S, mut on_round: F) -> Result<RunSummary, TrfError>
    where
        S: RecordSink + ?Sized,
        F: FnMut(&RoundReport),
    {
        let mut rounds = 0u64;
        let mut records_emitted = 0u64;
        loop {
            if let Some(stop_reason) = self.halt_reason() {
                tracing::debug!(?stop_reason, rounds, "mining loop halted");
                return Ok(RunSummary {
                    rounds,
                    records_emitted,
                    final_state: self.state,
                    stop_reason,
                });
            }
            let report = self.step(sink)?;
            rounds += 1;
            if matches!(report.outcome, RoundOutcome::Found { .. }) {
                records_emitted += 1;
            }
            on_round(&report);
        }
    }

    /// Reason the loop must not start another round, if any.
    pub fn halt_reason(&self) -> Option<StopReason> {
        if self.stop.is_stop_requested() {
            return Some(StopReason::StopRequested);
        }
        match self.params.max_rounds {
            Some(cap) if self.state.round >= cap => Some(StopReason::RoundCap),
            _ => None,
        }
    }
}
