use oas_view_routes::cli::run_cli;
use oas_view_routes::telemetry::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env())?;
    run_cli()
}
