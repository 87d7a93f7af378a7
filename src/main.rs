use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use hat_approx::{hat, ApproxConfig, HatApproxNet};

/// Prints the hat function next to an untrained approximator network.
#[derive(Parser, Debug)]
#[command(author, version, about = "Evaluate hat(x) and a freshly initialized HatApproxNet")]
struct Cli {
    /// Width of the hidden layers (overrides the config file)
    #[arg(long)]
    hidden_dim: Option<usize>,

    /// Seed for parameter initialization (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file with `hidden_dim` and `seed`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit one JSON object per point instead of a table
    #[arg(long)]
    json: bool,

    /// Points to evaluate
    #[arg(
        allow_negative_numbers = true,
        default_values_t = [-1.5, -1.0, -0.5, 0.0, 0.3, 0.5, 1.0, 1.5]
    )]
    xs: Vec<f64>,
}

#[derive(Serialize)]
struct PointReport {
    x: f64,
    hat: f64,
    net: f64,
}

impl PointReport {
    fn render(&self, json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string(self)?);
        }
        Ok(format!("{:>10.4} {:>10.4} {:>10.6}", self.x, self.hat, self.net))
    }
}

/// Config file values (or defaults) with any command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<ApproxConfig> {
    let mut config = match &cli.config {
        Some(path) => ApproxConfig::load_json(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ApproxConfig::default(),
    };
    if let Some(hidden_dim) = cli.hidden_dim {
        config.hidden_dim = hidden_dim;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn report_lines(cli: &Cli) -> Result<Vec<String>> {
    let config = resolve_config(cli)?;
    let net = HatApproxNet::from_config(&config).context("building network")?;
    log::info!(
        "hidden_dim={} parameters={} seed={:?}",
        net.hidden_dim(),
        net.parameter_count(),
        config.seed
    );

    let mut lines = Vec::with_capacity(cli.xs.len() + 1);
    if !cli.json {
        lines.push(format!("{:>10} {:>10} {:>10}", "x", "hat(x)", "net(x)"));
    }
    for (&x, net) in cli.xs.iter().zip(net.predict_batch(&cli.xs)) {
        lines.push(PointReport { x, hat: hat(x), net }.render(cli.json)?);
    }
    Ok(lines)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    for line in report_lines(&cli)? {
        println!("{line}");
    }
    Ok(())
}
