use thiserror::Error;

#[derive(Debug, Error)]
pub enum LumeError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed service response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<LumeError> for String {
    fn from(err: LumeError) -> Self {
        err.to_string()
    }
}
