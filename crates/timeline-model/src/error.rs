use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
