use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardingError {
    #[error("unknown boarding method {0:?} (expected btf, ftb, random or steffen)")]
    UnknownMethod(String),
}

pub type BoardingResult<T> = Result<T, BoardingError>;
