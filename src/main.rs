use std::sync::Arc;

use anyhow::Result;
use gallerist::config::Config;
use gallerist::constants::ERROR_NO_DATASET;
use gallerist::dataset::JsonFileSource;
use gallerist::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let mut dataset_path: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--init-config" => {
                let path = Config::get_default_config_path()?;
                Config::generate_default_config(&path)?;
                return Ok(());
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            path => dataset_path = Some(path.to_string()),
        }
    }

    let mut config = Config::load()?;
    if let Some(path) = dataset_path {
        config.data.path = path;
    }

    if config.data.path.is_empty() {
        eprintln!("{ERROR_NO_DATASET}");
        eprintln!("\n💡 To use this app:");
        eprintln!("1. Pass a dataset file: gallerist records.json");
        eprintln!("2. Or set data.path in the configuration file");
        eprintln!("   (generate one with: gallerist --init-config)");
        return Ok(());
    }

    logger::init(&config.logging)?;

    let source = Arc::new(JsonFileSource::new(&config.data.path));
    ui::run_app(config, source).await?;

    Ok(())
}

fn print_usage() {
    println!("gallerist - terminal record-gallery browser");
    println!();
    println!("Usage: gallerist [DATASET.json]");
    println!();
    println!("Options:");
    println!("  --init-config  Generate a default configuration file");
    println!("  -h, --help     Show this help");
}
