use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid phase '{value}'. Valid phases are: {valid}")]
    InvalidPhase { value: String, valid: String },
    #[error("no element profile named '{0}'")]
    ProfileNotFound(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
