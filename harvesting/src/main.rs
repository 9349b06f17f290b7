use std::process::ExitCode;
use clap::Parser;
use harvesting::config::{DEFAULT_ENDPOINT, DEFAULT_METADATA_PREFIX};
use harvesting::{HarvestConfig, Harvester, sanitize_collection};

/// Print the full-record links of every item in a DSpace collection.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Set spec of the collection, e.g. col_10919_5
    collection: String,

    #[arg(long, env = "OAI_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[arg(long, env = "OAI_METADATA_PREFIX", default_value = DEFAULT_METADATA_PREFIX)]
    metadata_prefix: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harvesting=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HarvestConfig::new(&cli.endpoint)?.with_metadata_prefix(&cli.metadata_prefix)?;
    let harvester = Harvester::new(config)?;
    let collection = sanitize_collection(&cli.collection);
    let result = harvester.harvest(&collection).await?;
    if !result.has_records() {
        eprintln!("The requested collection, \"{collection}\", contained no matching records.");
        return Ok(ExitCode::from(2));
    }
    for link in result.urls() {
        println!("{}", link?);
    }
    Ok(ExitCode::SUCCESS)
}
