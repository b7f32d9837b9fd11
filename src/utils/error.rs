use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Output sink error: {message}")]
    SinkError { message: String },
}

pub type Result<T> = std::result::Result<T, NotifyError>;
