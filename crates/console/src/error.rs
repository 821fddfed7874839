use thiserror::Error;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Failures of the console itself (domain errors are reported, not raised).
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream reached end-of-file while a line was expected.
    #[error("input closed")]
    InputClosed,
}
