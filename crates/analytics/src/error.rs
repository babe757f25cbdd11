use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnalyticsError {
    #[error("Missing input for calculation: {0}")]
    MissingInput(String),
}
