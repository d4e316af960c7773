use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid severity: {0}")]
    InvalidSeverity(String),

    #[error("{record} '{id}' has an empty {field}")]
    EmptyField {
        record: &'static str,
        id: String,
        field: &'static str,
    },
}
