use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to open the document: {0}")]
    Document(String),
}

pub type Result<T> = std::result::Result<T, StudzError>;
