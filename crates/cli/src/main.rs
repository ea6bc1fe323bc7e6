//! versecorpus
//!
//! Loads the classical poem corpus and echoes its first entries as a
//! smoke test of the loader.

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use versecorpus_core::{CorpusLoader, LoaderConfig};

/// Number of poems echoed to stdout
const PREVIEW_COUNT: usize = 5;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the preview
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = LoaderConfig::default();
    let path = config.path.clone();

    let loader = CorpusLoader::new(config)?;
    let corpus = loader
        .load()
        .with_context(|| format!("Failed to load corpus: {}", path.display()))?;

    let stats = corpus.stats();
    info!(
        "Kept {} of {} poems ({:.1}%)",
        stats.accepted,
        stats.total_lines,
        stats.acceptance_rate()
    );

    for poem in corpus.head(PREVIEW_COUNT) {
        println!("{}", poem);
    }

    Ok(())
}
