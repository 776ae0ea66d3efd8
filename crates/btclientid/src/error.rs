#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{style} code {code:?} must be {expected} characters long")]
    InvalidStyleCode {
        style: &'static str,
        code: String,
        expected: usize,
    },
    #[error("empty client name for code {0:?}")]
    EmptyClientName(String),
    #[error("simple client {0:?} has an empty id")]
    EmptySimpleId(String),
    #[error("client {0:?} has an empty version")]
    EmptyVersion(String),
    #[error("invalid hex peer id: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, Error>;
