pub mod error;
pub mod extract;
pub mod preprocess;
pub mod tokenize;
pub mod validate;

pub use error::ExtractError;
pub use extract::extract_words;
pub use tokenize::{MecabTokenizer, Tokenizer};
pub use validate::is_valid_word;
