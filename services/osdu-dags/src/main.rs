use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use osdu_core::{CoreResult, DagsConfig, LoggingConfig, Variables};
use osdu_dags::input::load_run_conf;
use osdu_dags::telemetry::init_logging;
use osdu_dags::{build_record, create_records};
use osdu_storage::StorageClient;

#[derive(Parser, Debug)]
#[command(name = "osdu-dags")]
#[command(about = "OSDU workflow task runner", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a new record from a run configuration and submit it to storage
    CreateRecords {
        /// Run configuration as an inline JSON object
        #[arg(long, conflicts_with = "conf_file", required_unless_present = "conf_file")]
        conf: Option<String>,

        /// File holding the run configuration ('-' reads stdin)
        #[arg(long)]
        conf_file: Option<PathBuf>,

        /// Storage API base URL (overrides storage.url)
        #[arg(long)]
        storage_url: Option<String>,

        /// File of workflow variables (JSON, YAML or TOML)
        #[arg(long, env = "OSDU_VARIABLES_FILE")]
        variables_file: Option<PathBuf>,

        /// Print the request body instead of sending it
        #[arg(long, default_value = "false")]
        dry_run: bool,
    },

    /// Generate a configuration file template
    GenerateConfig {
        /// Output configuration file path
        #[arg(long, default_value = "osdu-dags.yaml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CreateRecords {
            conf,
            conf_file,
            storage_url,
            variables_file,
            dry_run,
        } => {
            let config = match load_config(storage_url) {
                Ok(config) => config,
                Err(e) => {
                    init_logging(&LoggingConfig::default());
                    error!("create-records failed: {}", e);
                    return Err(e.into());
                }
            };
            init_logging(&config.logging);

            let run = run_create_records(
                &config,
                conf.as_deref(),
                conf_file.as_deref(),
                variables_file.as_deref(),
                dry_run,
            )
            .await;

            if let Err(e) = run {
                error!("create-records failed: {}", e);
                return Err(e);
            }
            Ok(())
        }

        Commands::GenerateConfig { output } => {
            std::fs::write(&output, DagsConfig::template())?;
            println!("Configuration template written to: {}", output.display());
            println!("\nUse it with:");
            println!("  OSDU_DAGS_CONFIG={} osdu-dags create-records ...", output.display());
            Ok(())
        }
    }
}

/// Loads configuration and applies the `--storage-url` override.
fn load_config(storage_url: Option<String>) -> CoreResult<DagsConfig> {
    let mut config = DagsConfig::load()?;
    if let Some(url) = storage_url {
        config.storage.url = url;
        config.validate()?;
    }
    Ok(config)
}

async fn run_create_records(
    config: &DagsConfig,
    conf: Option<&str>,
    conf_file: Option<&Path>,
    variables_file: Option<&Path>,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let run_conf = load_run_conf(conf, conf_file).await?;
    let variables = Variables::load(variables_file)?;

    if dry_run {
        let record = build_record(&run_conf, &variables)?;
        info!("Dry run: request not sent to {}", config.storage.records_url());
        println!("{}", serde_json::to_string_pretty(&[record])?);
        return Ok(());
    }

    let client = StorageClient::new(&config.storage)?;
    let result = create_records(&run_conf, &variables, &client).await?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
