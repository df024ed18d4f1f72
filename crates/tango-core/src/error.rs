#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("segmenter failed: {0}")]
    Segmenter(String),

    #[error("segmenter produced non-UTF-8 output")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
