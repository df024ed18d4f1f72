use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::ExtractError;

/// External segmentation collaborator: splits raw text into
/// whitespace-joined surface forms.
#[async_trait]
pub trait Tokenizer: Send + Sync {
    async fn tokenize(&self, text: &str) -> Result<String, ExtractError>;
}

/// Tokenizer backed by the MeCab binary in wakati mode.
pub struct MecabTokenizer {
    command: String,
}

impl MecabTokenizer {
    pub fn new() -> Self {
        Self::with_command("mecab")
    }

    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for MecabTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tokenizer for MecabTokenizer {
    async fn tokenize(&self, text: &str) -> Result<String, ExtractError> {
        let mut child = Command::new(&self.command)
            .arg("-Owakati")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ExtractError::Segmenter("stdin unavailable".to_string()))?;
        stdin.write_all(text.as_bytes()).await?;
        drop(stdin);

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(ExtractError::Segmenter(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
