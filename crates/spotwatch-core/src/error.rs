use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpotwatchError>;

#[derive(Debug, Error)]
pub enum SpotwatchError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{service} request failed with status {status}")]
    Status { service: &'static str, status: u16 },

    #[error("{service} response is missing expected field: {field}")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },

    #[error("malformed XML from {service}: {message}")]
    Xml {
        service: &'static str,
        message: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
