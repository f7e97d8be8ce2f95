use thiserror::Error;

pub type Result<T> = std::result::Result<T, LatticeError>;

#[derive(Error, Debug)]
pub enum LatticeError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("{0}")]
    Other(String),
}
