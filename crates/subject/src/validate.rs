use crate::error::InvalidSubjectReason;
use crate::token::{SINGLE_WILDCARD, TAIL_WILDCARD, Token, tokenize};

/// Validate a raw subject and classify its tokens.
///
/// Rules, checked per token from left to right:
///
/// - no token may be empty (rejects `""`, `.foo`, `foo.`, `foo..bar`)
/// - a token that is exactly `>` must be the last token
///
/// Every other token is valid anywhere, including `*` and tokens that merely
/// contain `*` or `>`.
///
/// # Errors
///
/// Returns the [`InvalidSubjectReason`] for the first rule the subject breaks.
pub fn validate(raw: &str) -> Result<Vec<Token>, InvalidSubjectReason> {
    if raw.is_empty() {
        return Err(InvalidSubjectReason::Empty);
    }

    let mut tokens = Vec::new();
    let mut tail_at = None;

    for (position, token) in tokenize(raw).enumerate() {
        if let Some(position) = tail_at {
            return Err(InvalidSubjectReason::MisplacedTailWildcard { position });
        }

        if token.is_empty() {
            return Err(InvalidSubjectReason::EmptyToken { position });
        }

        let token = Token::classify(token);
        if token == Token::TailWildcard {
            tail_at = Some(position);
        }
        tokens.push(token);
    }

    Ok(tokens)
}

/// Whether `raw` is a syntactically valid subject.
#[must_use]
pub fn is_valid_subject(raw: &str) -> bool {
    validate(raw).is_ok()
}

/// Whether `raw` has no token that is exactly `*` or exactly `>`.
///
/// This does not validate `raw`; pair it with [`is_valid_subject`] when the
/// input is untrusted.
#[must_use]
pub fn is_literal_subject(raw: &str) -> bool {
    tokenize(raw).all(|token| token != SINGLE_WILDCARD && token != TAIL_WILDCARD)
}
