use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Carries the whitespace-stripped input.
    #[error("the expression `{0}` does not match any known shape")]
    UnrecognizedShape(String),
}
