use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored {field} {stored} does not match requested {requested}")]
    ConfigMismatch {
        field: &'static str,
        stored: String,
        requested: String,
    },

    #[error("invalid filter config: {0}")]
    InvalidConfig(String),

    #[error("corrupt filter file: {0}")]
    Corrupt(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
