use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::error;

use ecourts_checker::{logger, App, Config};

/// Scrape eCourts website for case listings.
#[derive(Debug, Parser)]
#[command(version, after_help = "Example: ecourts_checker --case-id MHHC010000012023")]
struct Cli {
    /// Case Number Record (CNR) of the case
    #[arg(long = "case-id", visible_alias = "cnr", value_name = "CNR")]
    case_id: Option<String>,

    /// Download the cause list for today (feature placeholder)
    #[arg(long)]
    causelist: bool,

    /// TOML configuration file
    #[arg(long, value_name = "PATH", env = "ECOURTS_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the result file
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Run the browser without a window
    #[arg(long)]
    headless: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    config.headless |= cli.headless;
    config.verbose_logging |= cli.verbose;

    logger::init(config.verbose_logging);

    let app = App::new(config);

    if let Some(cnr) = cli.case_id {
        if let Err(e) = app.check_case(&cnr).await {
            error!("❌ {:#}", e);
            return Ok(ExitCode::FAILURE);
        }
    } else if cli.causelist {
        app.download_cause_list();
    } else {
        Cli::command().print_help()?;
    }

    Ok(ExitCode::SUCCESS)
}
