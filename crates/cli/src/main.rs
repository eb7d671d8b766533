//! Trace-driven branch predictor evaluation CLI.

use clap::Parser;
use serde::Serialize;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use bpred::config::{PerceptronIndex, PredictorConfig, PredictorKind};
use bpred::sim;
use bpred::trace::TraceReader;
use bpred::{BranchPredictor, Predictor, SimStats};

#[derive(Parser, Debug)]
#[command(
    name = "bpred",
    author,
    version,
    about = "Replay a branch trace through a direction predictor",
    long_about = None,
)]
struct Cli {
    /// Trace file with one `<hex pc> <0|1>` branch per line. Reads stdin when omitted.
    trace: Option<PathBuf>,

    /// TOML predictor configuration. Flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Predictor kind: static, gshare, tournament or custom.
    #[arg(short, long)]
    predictor: Option<PredictorKind>,

    /// Global history width in bits.
    #[arg(long)]
    ghistory: Option<u32>,

    /// Local history width in bits (tournament).
    #[arg(long)]
    lhistory: Option<u32>,

    /// PC index width in bits (tournament meta/local tables, perceptron pc indexing).
    #[arg(long)]
    pc_index: Option<u32>,

    /// Saturating counter width in bits.
    #[arg(long)]
    counter_bits: Option<u32>,

    /// Perceptron row selection: hashed or pc.
    #[arg(long)]
    perceptron_index: Option<PerceptronIndex>,

    /// Print every prediction (0 or 1) on its own line.
    #[arg(short, long)]
    verbose: bool,

    /// Print statistics as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    predictor: &'a str,
    config: &'a PredictorConfig,
    stats: SimStats,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = build_config(&cli).unwrap_or_else(|e| fatal(e));
    let mut bp = Predictor::configure(&config).unwrap_or_else(|e| fatal(e));

    let input: Box<dyn BufRead> = match &cli.trace {
        Some(path) => {
            let file = File::open(path)
                .unwrap_or_else(|e| fatal(format!("Could not open '{}': {}", path.display(), e)));
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let verbose = cli.verbose;

    let stats = sim::run(&mut bp, TraceReader::new(input), |_, predicted| {
        if verbose {
            writeln!(out, "{}", predicted as u8).ok();
        }
    })
    .unwrap_or_else(|e| fatal(e));
    out.flush().ok();
    drop(out);

    let name = config.describe();
    if cli.json {
        let report = Report {
            predictor: &name,
            config: &config,
            stats,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fatal(e),
        }
    } else {
        stats.print(&name);
    }
    log::debug!("{} finished", bp.name());
}

/// Loads `--config` (or the defaults) and applies the width/kind flags on top.
fn build_config(cli: &Cli) -> Result<PredictorConfig, String> {
    let config = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Could not read config '{}': {}", path.display(), e))?;
            PredictorConfig::from_toml_str(&content)
                .map_err(|e| format!("Invalid config '{}': {}", path.display(), e))?
        }
        None => PredictorConfig::default(),
    };
    Ok(apply_overrides(cli, config))
}

fn apply_overrides(cli: &Cli, mut config: PredictorConfig) -> PredictorConfig {
    if let Some(kind) = cli.predictor {
        config.kind = kind;
    }
    if let Some(bits) = cli.ghistory {
        config.ghistory_bits = bits;
    }
    if let Some(bits) = cli.lhistory {
        config.lhistory_bits = bits;
    }
    if let Some(bits) = cli.pc_index {
        config.pc_index_bits = bits;
    }
    if let Some(bits) = cli.counter_bits {
        config.counter_bits = bits;
    }
    if let Some(mode) = cli.perceptron_index {
        config.perceptron_index = mode;
    }
    config
}

fn fatal(msg: impl Display) -> ! {
    eprintln!("\n[!] FATAL: {}", msg);
    process::exit(1);
}
