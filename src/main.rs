use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use drone_planner::assembler::AssembleOptions;
use drone_planner::config::PlannerConfig;
use drone_planner::error::AppError;
use drone_planner::ilp::{IlpClient, IlpConfig};
use drone_planner::output::write_results;
use drone_planner::session::{parse_day, plan_day};

/// Plan a day of pizza deliveries from Appleton Tower.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Delivery date, YYYY-MM-DD.
    date: String,

    /// Base URL of the ILP REST service.
    base_url: String,

    /// Directory the result files are written to.
    #[arg(long, default_value = "resultfiles")]
    output_dir: PathBuf,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Plan restaurants one by one instead of in parallel.
    #[arg(long)]
    sequential: bool,
}

fn run(args: Args) -> Result<(), AppError> {
    let date = parse_day(&args.date)?;
    if !(args.base_url.starts_with("https://") || args.base_url.starts_with("http://")) {
        return Err(AppError::InvalidArgument(format!(
            "base URL must start with http:// or https://, got {}",
            args.base_url
        )));
    }

    let client = IlpClient::new(IlpConfig {
        base_url: args.base_url,
        timeout_secs: args.timeout_secs,
    })?;
    let options = AssembleOptions {
        warm_cache: !args.sequential,
    };

    let outcome = plan_day(&client, date, PlannerConfig::default(), &options)?;
    write_results(&args.output_dir, date, &outcome.orders, &outcome.plan.movements)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}
