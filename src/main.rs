//*** START FILE: src/main.rs ***//
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use weave_translate::config::{load_config_from_file, DEFAULT_CONFIG_FILE};
use weave_translate::run_translation;

#[derive(Parser, Debug)]
#[command(version, about = "Replace English words with their French equivalents in a text file")]
struct Cli {
    /// TOML file overriding the input and output paths
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config_from_file(&cli.config)?;

    match run_translation(&config) {
        Ok(outcome) => {
            println!("Replaced words: {}", outcome.replaced_word_count());
            println!("{}", outcome.performance.render());
            Ok(())
        }
        Err(e) => {
            tracing::error!("translation failed: {}", e);
            Err(e.into())
        }
    }
}
//*** END FILE: src/main.rs ***//
