/// Error returned when parsing a [`Severity`](crate::Severity) from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeverityError {
    #[error("severity must not be empty")]
    Empty,

    #[error("unknown severity: {0:?}")]
    Unknown(String),
}
