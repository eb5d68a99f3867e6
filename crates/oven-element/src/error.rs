//! Error types for element trees.

/// Error from a structural tree operation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ElementError {
    /// The element's tag has no closing tag and cannot hold children.
    #[error("Cannot add children to void element <{tag}>")]
    InvalidOperation {
        /// Tag name of the void element.
        tag: String,
    },
}
