//! Normalize content to English from the command line.
//!
//! Usage:
//!   content-normalizer "Bonjour, comment allez-vous?"   # one content from arguments
//!   cat posts.txt | content-normalizer                  # one content per stdin line
//!
//! Each outcome is printed as one JSON line: `{"is_english":false,"text":"..."}`
//!
//! Optional environment variables:
//! - OLLAMA_HOST (defaults to http://localhost:11434)
//! - OLLAMA_MODEL (defaults to qwen3:0.6b)

use anyhow::Result;
use content_normalizer::stream::{normalize_lines, write_outcome};
use content_normalizer::{Config, ContentNormalizer};
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging (stdout is reserved for results)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("content_normalizer=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Using Ollama at {} with model {}",
        config.ollama_host, config.model_name
    );

    let normalizer = ContentNormalizer::from_config(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        // One content per stdin line, each written as soon as it is processed
        let stdin = BufReader::new(tokio::io::stdin());
        normalize_lines(&normalizer, stdin, tokio::io::stdout()).await?;
    } else {
        let outcome = normalizer.translate_content(&args.join(" ")).await;
        write_outcome(&mut tokio::io::stdout(), &outcome).await?;
    }

    let report = normalizer.metrics().report();
    info!(
        "Processed {} contents: {} English, {} translated, {} fallbacks ({:.1}%)",
        report.processed,
        report.detected_english,
        report.translated,
        report.fallbacks,
        report.fallback_rate
    );

    Ok(())
}
