//! Walkthrough binary.
//!
//! Runs the composition, Functor and Monad examples against the text given
//! on the command line. Without `--text` the input is absent and every
//! `Maybe` pipeline short-circuits; only the plain composition stages fall
//! back to a sample word.

use clap::Parser;
use functorial::text::DEFAULT_SUFFIX;
use functorial::walkthrough::{DEFAULT_SEED, Walkthrough};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line configuration.
#[derive(Debug, Parser)]
#[command(name = "functorial", version, about = "Walk through composition, Functor and Monad")]
struct Config {
    /// Input text; omit it to run every pipeline on an absent value.
    #[arg(long, env = "FUNCTORIAL_TEXT")]
    text: Option<String>,

    /// Suffix appended by the enhance stage.
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Seed for the numeric chain example.
    #[arg(long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    seed: i64,
}

impl From<Config> for Walkthrough {
    fn from(config: Config) -> Self {
        Self::new(config.text)
            .with_suffix(config.suffix)
            .with_seed(config.seed)
    }
}

#[allow(clippy::print_stdout)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,functorial=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let report = Walkthrough::from(Config::parse()).run()?;
    print!("{report}");

    tracing::info!("walkthrough finished");
    Ok(())
}
