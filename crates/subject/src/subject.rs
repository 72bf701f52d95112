use crate::error::{Error, Result};
use crate::token::Token;
use crate::validate::validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A validated subject name or subject pattern.
///
/// A `Subject` can only be obtained through [`Subject::new`] (or the
/// conversions that call it), so its tokens are always non-empty and a `>`
/// token, if any, is last.
///
/// # Examples
///
/// ```
/// use proven_subject::Subject;
///
/// let subject = Subject::new("orders.*.new").unwrap();
/// assert_eq!(subject.len(), 3);
/// assert!(!subject.is_literal());
///
/// assert!(Subject::new("orders..new").is_err());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject {
    raw: String,
    tokens: Vec<Token>,
}

impl Subject {
    /// Creates a new `Subject` from a candidate string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSubject` if the string is empty, has an empty
    /// token, or places `>` anywhere but last.
    pub fn new(subject: impl Into<String>) -> Result<Self> {
        let raw = subject.into();

        match validate(&raw) {
            Ok(tokens) => {
                trace!(subject = %raw, tokens = tokens.len(), "parsed subject");
                Ok(Self { raw, tokens })
            }
            Err(reason) => {
                debug!(subject = %raw, %reason, "rejected invalid subject");
                Err(Error::InvalidSubject {
                    subject: raw,
                    reason,
                })
            }
        }
    }

    /// The subject exactly as it was given to [`Subject::new`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The classified tokens, in hierarchy order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens. Always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the subject ends with the `>` wildcard.
    #[must_use]
    pub fn has_tail_wildcard(&self) -> bool {
        self.tokens.last() == Some(&Token::TailWildcard)
    }

    /// Whether the subject names exactly one channel, i.e. holds no `*` or
    /// `>` token.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        !self.tokens.iter().any(Token::is_wildcard)
    }

    /// Whether every concrete subject matched by `self` is also matched by
    /// `other`.
    ///
    /// The relation is asymmetric: `foo.bar` is a subset of `foo.*`, but not
    /// the other way around.
    ///
    /// - `>` in `other` accepts the rest of `self` as long as `self` has at
    ///   least one token left at that position
    /// - `*` in `other` accepts a literal or `*`, never `>`
    /// - a literal in `other` accepts only the identical literal
    ///
    /// Without a `>` in `other`, both subjects must have the same length.
    #[must_use]
    pub fn is_subset_match(&self, other: &Self) -> bool {
        for (position, theirs) in other.tokens.iter().enumerate() {
            let Some(ours) = self.tokens.get(position) else {
                return false;
            };

            match (ours, theirs) {
                (_, Token::TailWildcard) => return true,
                (Token::Literal(_) | Token::SingleWildcard, Token::SingleWildcard) => {}
                (Token::Literal(ours), Token::Literal(theirs)) if ours == theirs => {}
                _ => return false,
            }
        }

        self.tokens.len() == other.tokens.len()
    }

    /// Whether `self` is equal to or broader than `other`.
    ///
    /// Equivalent to `other.is_subset_match(self)`.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.is_subset_match(self)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Subject {
    type Error = Error;

    fn try_from(subject: String) -> Result<Self> {
        Self::new(subject)
    }
}

impl TryFrom<&str> for Subject {
    type Error = Error;

    fn try_from(subject: &str) -> Result<Self> {
        Self::new(subject)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.raw
    }
}
