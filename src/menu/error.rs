use thiserror::Error;

pub type Result<T> = std::result::Result<T, MenuError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("identifier registered twice: {0}")]
    DuplicateIdentifier(String),
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),
    #[error("button in `{node}` points to unregistered `{target}`")]
    DanglingTarget { node: String, target: String },
}
