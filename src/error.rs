use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardbookError {
    #[error("record '{0}' not found")]
    RecordNotFound(i64),

    #[error("record '{0}' already exists in the directory")]
    DuplicateId(i64),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("malformed response from remote service: {0}")]
    Decode(String),

    #[error("remote service rejected the request: {0}")]
    RemoteRejected(String),

    #[error("invalid gender '{0}'")]
    InvalidGender(String),

    #[error("invalid role '{0}'")]
    InvalidRole(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WardbookError>;
