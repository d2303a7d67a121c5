use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use asg_health_waiter_core::{
    HealthWaiterError, HealthWaiterResult, HealthWaiterService, InstanceId, WaitReport,
    WaiterConfig, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL,
};
use clap::Parser;
use log::{error, LevelFilter};

/// Wait until an EC2 instance is healthy in every target group of its Auto Scaling group
#[derive(Parser, Debug)]
#[command(name = "asg-health-waiter", version, about, long_about = None)]
struct Cli {
    /// The ID of the instance
    instance_id: String,

    /// Seconds to wait between target health queries
    #[arg(
        long,
        value_name = "SECONDS",
        env = "ASG_HEALTH_WAITER_POLL_INTERVAL",
        default_value_t = DEFAULT_POLL_INTERVAL.as_secs()
    )]
    poll_interval: u64,

    /// Target health queries per target group before giving up
    #[arg(
        long,
        value_name = "N",
        env = "ASG_HEALTH_WAITER_MAX_ATTEMPTS",
        default_value_t = DEFAULT_MAX_ATTEMPTS
    )]
    max_attempts: u32,

    /// AWS region, overriding the default provider chain
    #[arg(long)]
    region: Option<String>,

    /// Print a JSON summary of the run to stdout on success
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .context("Failed to initialize logger")
}

async fn run(cli: &Cli) -> HealthWaiterResult<WaitReport> {
    let config = WaiterConfig::new(Duration::from_secs(cli.poll_interval), cli.max_attempts)?;

    let instance_id = InstanceId::new(cli.instance_id.trim());
    let service = HealthWaiterService::new(config, cli.region.clone()).await?;
    service.wait_until_healthy(&instance_id).await
}

fn print_report(report: &WaitReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize wait report")?;
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli).await {
        Ok(report) => {
            if cli.json {
                if let Err(e) = print_report(&report) {
                    error!("{e:#}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            exit_code(&e)
        }
    }
}

fn exit_code(error: &HealthWaiterError) -> ExitCode {
    u8::try_from(error.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
