use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Semaphore;

use tango_core::extract::extract_words;
use tango_core::preprocess::normalize;
use tango_core::tokenize::Tokenizer;
use tango_jisho::{DefinitionRecord, Glossary, LookupError};

use crate::config::Config;
use crate::progress::ProgressBar;

/// Extract vocabulary from `text`, resolve every word concurrently, and
/// return the word to definition mapping.
///
/// Extraction failure aborts the run; a failed lookup only leaves its
/// word out of the mapping. All mutation of the mapping and the bar
/// happens on this task, fed by a channel of completed lookups.
pub async fn run(
    text: &str,
    tokenizer: &dyn Tokenizer,
    glossary: Arc<dyn Glossary>,
    config: &Config,
) -> Result<HashMap<String, DefinitionRecord>> {
    let text = normalize(text);
    let words = extract_words(&text, tokenizer)
        .await
        .context("word extraction failed")?;

    println!("Extracted {} words", words.len());

    if words.is_empty() {
        println!("Done.");
        return Ok(HashMap::new());
    }

    let total = words.len();
    let limiter =
        (config.max_in_flight > 0).then(|| Arc::new(Semaphore::new(config.max_in_flight)));
    let (tx, rx) = kanal::unbounded_async::<(String, Result<DefinitionRecord, LookupError>)>();

    for word in words {
        let glossary = Arc::clone(&glossary);
        let limiter = limiter.clone();
        let tx = tx.clone();

        tokio::spawn(async move {
            let _permit = match &limiter {
                Some(semaphore) => Arc::clone(semaphore).acquire_owned().await.ok(),
                None => None,
            };

            let outcome = glossary.define(&word).await;
            let _ = tx.send((word, outcome)).await;
        });
    }
    drop(tx);

    let mut mapping = HashMap::with_capacity(total);
    let mut progress = ProgressBar::with_width(total, config.progress_width);
    let mut stdout = std::io::stdout();

    for _ in 0..total {
        let (word, outcome) = rx
            .recv()
            .await
            .context("a lookup task exited without reporting")?;

        match outcome {
            Ok(record) => {
                mapping.insert(word, record);
            }
            Err(e) => tracing::warn!("lookup for {word} failed: {e}"),
        }

        progress.advance();
        write!(stdout, "\r{}", progress.render())?;
        stdout.flush()?;
    }

    println!("\nDone.");
    tracing::debug!("resolved {}/{} words", mapping.len(), progress.completed());

    Ok(mapping)
}
