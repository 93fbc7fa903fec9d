use thiserror::Error;

/// Errors produced while solving flow networks or reading problem input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("vertex {0} is not part of the network")]
    InvalidVertex(usize),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("network contains a negative-cost cycle reachable from the source")]
    NegativeCycle,

    #[error("invalid flow: {0}")]
    InvalidFlow(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("could not parse token `{token}`")]
    Parse { token: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
