use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnekError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
