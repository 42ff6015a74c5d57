pub use anyhow::bail;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CfError {
    Conversion(String),
    Normalization(String),
    Catastrophic(String),
    Config(String),
    Internal(String),
    Io(#[from] std::io::Error),
    Other(#[from] anyhow::Error),
}

impl Display for CfError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CfError::Conversion(s) => write!(f, "String conversion error: {}", s),
            CfError::Normalization(s) => write!(f, "Normalization error: {}", s),
            CfError::Catastrophic(s) => write!(f, "Unexpected error: {}", s),
            CfError::Config(s) => write!(f, "Configuration error: {}", s),
            CfError::Internal(s) => write!(f, "Internal error: {}", s),
            CfError::Io(e) => write!(f, "I/O error: {}", e),
            CfError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl CfError {
    /// True for failures that must not be retried or recovered from.
    pub fn is_catastrophic(&self) -> bool {
        matches!(self, CfError::Catastrophic(_))
    }
}

pub type Result<T> = std::result::Result<T, CfError>;
