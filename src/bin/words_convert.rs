//! Generate words.json from the delimited word source.
//!
//! Usage: `words_convert [input.csv] [output.json]`
//! Defaults to `<DATA_DIR>/words.csv` and `<DATA_DIR>/words.json`.

use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jpzh_quiz::content::convert_csv_to_json;
use jpzh_quiz::paths;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "words_convert=info,jpzh_quiz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(paths::words_csv_path()));
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(paths::words_json_path()));

    match convert_csv_to_json(&input, &output) {
        Ok(count) => tracing::info!(
            "{} generated from {} ({} words)",
            output.display(),
            input.display(),
            count
        ),
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}
