//! Validation errors for caller-supplied identifiers.

/// An identifier outside the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not one of the catalog topic keys
    #[error("invalid topic id: {0:?}")]
    InvalidTopicId(String),

    /// Not one of the section keys
    #[error("invalid section id: {0:?}")]
    InvalidSectionId(String),
}
