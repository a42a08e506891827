use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    #[error("Invalid stuffing: {0}")]
    InvalidStuffing(String),

    #[error("Invalid topping: {0}")]
    InvalidTopping(String),

    #[error("Duplicate topping: {0}")]
    DuplicateTopping(String),

    #[error("Topping not found: {0}")]
    ToppingNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, OrderError>;
