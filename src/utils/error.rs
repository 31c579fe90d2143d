use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    /// The only failure a drill itself can produce: a rejected argument,
    /// rendered as its bare human-readable message.
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, DrillError>;
