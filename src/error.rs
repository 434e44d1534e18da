use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Element not found: {0}")]
    MissingElement(String),
    #[error("No browser window available")]
    NoWindow,
}
