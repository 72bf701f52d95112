use thiserror::Error as ThisError;

/// Result type for subject operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when constructing a subject.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// The candidate string is not a syntactically valid subject.
    #[error("invalid subject '{subject}': {reason}")]
    InvalidSubject {
        /// The rejected input, verbatim.
        subject: String,

        /// Which validation rule the input broke.
        reason: InvalidSubjectReason,
    },
}

/// The validation rule a rejected subject violated.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum InvalidSubjectReason {
    /// The subject is the empty string.
    #[error("subject cannot be empty")]
    Empty,

    /// A token is empty, from a leading, trailing, or doubled separator.
    #[error("empty token at position {position}")]
    EmptyToken {
        /// Zero-based index of the empty token.
        position: usize,
    },

    /// The `>` wildcard appears before the last token.
    #[error("'>' wildcard at position {position} must be the last token")]
    MisplacedTailWildcard {
        /// Zero-based index of the offending `>` token.
        position: usize,
    },
}
