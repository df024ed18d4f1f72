use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tango_core::tokenize::MecabTokenizer;
use tango_jisho::JishoClient;

mod config;
mod pipeline;
mod progress;

#[cfg(test)]
mod tests;

use self::config::Config;

/// Extract vocabulary from a Japanese text file and look every word up in
/// the remote dictionary.
#[derive(Parser)]
#[command(name = "tango", version, about)]
struct Cli {
    /// UTF-8 text file to analyze
    file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr; stdout carries the progress line and the
    // final report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    let text = tokio::fs::read_to_string(&cli.file)
        .await
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let tokenizer = MecabTokenizer::with_command(config.mecab_command.as_str());
    let glossary = Arc::new(JishoClient::new(config.api_url.clone()));

    let mapping = pipeline::run(&text, &tokenizer, glossary, &config).await?;

    for (word, record) in &mapping {
        println!("{word} {record}");
    }

    Ok(())
}
