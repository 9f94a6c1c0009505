use thiserror::Error;

use crate::datatype::TemporalKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Format error: {text:?} is not a valid {kind}")]
    Format { text: String, kind: TemporalKind },
    #[error("No codec registered for {0}")]
    Unregistered(String),
    #[error("Node error: {0}")]
    Node(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    pub fn format(text: &str, kind: TemporalKind) -> Self {
        Self::Format { text: text.to_owned(), kind }
    }
}

// Helper conversions
impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self { Self::Node(e.to_string()) }
}
impl From<config::ConfigError> for CodecError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
