use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server responded with {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Column {0} is not sortable")]
    NotSortable(usize),

    #[error("Page {page} is out of range (1..={last})")]
    PageOutOfRange { page: u32, last: u32 },

    #[error("No row at index {0}")]
    RowOutOfRange(usize),

    #[error("Server response did not include a collection id")]
    MissingId,
}

impl CollectionError {
    pub fn config(msg: impl Into<String>) -> Self {
        CollectionError::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;
