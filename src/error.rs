use thiserror::Error;

/// Errors raised while setting up a fire simulation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FireError {
    #[error("invalid fire configuration: {0}")]
    InvalidConfig(String),
}

impl From<FireError> for std::io::Error {
    fn from(err: FireError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
