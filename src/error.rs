use thiserror::Error;

pub type NavResult<T> = Result<T, NavError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("scrolling is not implemented for viewport type: {kind}")]
    UnsupportedViewport { kind: String },

    #[error("no viewport is attached to element `{0}`")]
    UnknownElement(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
