//! Subject names and wildcard patterns for publish/subscribe messaging.
//!
//! A subject is a `.`-delimited hierarchy of tokens such as `orders.us.new`.
//! Two tokens carry wildcard meaning when they stand alone:
//!
//! - `*` matches exactly one token at its position
//! - `>` matches one or more trailing tokens and may only appear last
//!
//! ```
//! use proven_subject::Subject;
//!
//! let narrow = Subject::new("orders.*").unwrap();
//! let broad = Subject::new("orders.>").unwrap();
//!
//! assert!(narrow.is_subset_match(&broad));
//! assert!(!broad.is_subset_match(&narrow));
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

/// Validated subjects and the subset-match relation between them.
pub mod subject;

/// Tokenization and per-token wildcard classification.
pub mod token;

/// Syntactic validation of raw subject strings.
pub mod validate;

pub use error::{Error, InvalidSubjectReason, Result};
pub use subject::Subject;
pub use token::Token;
pub use validate::{is_literal_subject, is_valid_subject};
