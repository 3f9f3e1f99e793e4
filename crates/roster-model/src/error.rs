use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("missing required column \"{0}\"")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
