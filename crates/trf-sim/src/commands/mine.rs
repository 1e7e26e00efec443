use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Args;
use trf_core::provenance::RunProvenance;
use trf_mine::determinism::FIELD_SUBSTREAM;
use trf_mine::{
    JsonLinesSink, MineConfig, MiningLoop, RecordSink, RoundOutcome, RunManifest, RunSummary,
};

#[derive(Args, Debug)]
pub struct MineArgs {
    /// YAML configuration; flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Master seed for field generation.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Vertex count of the first field.
    #[arg(long = "initial-vertices")]
    pub initial_vertices: Option<usize>,
    /// Clique size searched for in every round.
    #[arg(long = "clique-size")]
    pub clique_size: Option<usize>,
    /// Stop after this many rounds.
    #[arg(long)]
    pub rounds: Option<u64>,
    /// Pause between rounds, in milliseconds.
    #[arg(long = "pace-ms")]
    pub pace_ms: Option<u64>,
    /// JSON-lines file for result records (stdout when omitted).
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Write a run manifest to this path when the run ends.
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub fn run(args: &MineArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    let params = config.params()?;
    let master_seed = config.seed_policy.master_seed;
    let pacing = Duration::from_millis(config.pacing_ms);

    tracing::info!(
        initial_vertices = params.initial_vertices,
        target_clique = params.target_clique,
        max_rounds = ?params.max_rounds,
        master_seed,
        "starting mining run"
    );

    let mut mining = MiningLoop::seeded(params, master_seed)?;
    let summary = match &config.output.records_file {
        Some(path) => {
            let mut sink = JsonLinesSink::create(path)?;
            drive(&mut mining, &mut sink, pacing)?
        }
        None => {
            let mut sink = JsonLinesSink::new(io::stdout().lock());
            drive(&mut mining, &mut sink, pacing)?
        }
    };

    tracing::info!(
        rounds = summary.rounds,
        records = summary.records_emitted,
        next_vertex_count = summary.final_state.vertex_count,
        stop_reason = ?summary.stop_reason,
        "mining run finished"
    );

    if let Some(path) = &config.output.manifest_file {
        let manifest = RunManifest {
            config: config.clone(),
            master_seed,
            seed_label: config.seed_policy.label.clone(),
            summary,
            records_file: config.output.records_file.clone(),
            provenance: RunProvenance::new(master_seed, FIELD_SUBSTREAM)
                .with_tool("trf-sim", env!("CARGO_PKG_VERSION")),
        };
        manifest.write(path)?;
        tracing::info!(path = %path.display(), "manifest written");
    }
    Ok(())
}

fn drive<S: RecordSink>(
    mining: &mut MiningLoop<trf_core::RngHandle>,
    sink: &mut S,
    pacing: Duration,
) -> Result<RunSummary, Box<dyn Error>> {
    let summary = mining.run_with(sink, |report| {
        if let RoundOutcome::NotFound = report.outcome {
            tracing::info!(
                round = report.round,
                vertex_count = report.vertex_count,
                "no clique in field, growing"
            );
        }
        if !pacing.is_zero() {
            thread::sleep(pacing);
        }
    })?;
    Ok(summary)
}

fn resolve_config(args: &MineArgs) -> Result<MineConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => MineConfig::load(path)?,
        None => MineConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed_policy.master_seed = seed;
    }
    if let Some(n) = args.initial_vertices {
        config.initial_vertices = n;
    }
    if let Some(k) = args.clique_size {
        config.target_clique = k;
    }
    if let Some(rounds) = args.rounds {
        config.max_rounds = Some(rounds);
    }
    if let Some(pace) = args.pace_ms {
        config.pacing_ms = pace;
    }
    if let Some(out) = &args.out {
        config.output.records_file = Some(out.clone());
    }
    if let Some(manifest) = &args.manifest {
        config.output.manifest_file = Some(manifest.clone());
    }
    Ok(config)
}
