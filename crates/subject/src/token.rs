use std::fmt;

/// Separator between subject tokens.
pub const SEPARATOR: char = '.';

/// Single-level wildcard token.
pub const SINGLE_WILDCARD: &str = "*";

/// Tail wildcard token.
pub const TAIL_WILDCARD: &str = ">";

/// Split a raw subject into its tokens.
///
/// No trimming is applied, so empty tokens are preserved for the validator to
/// reject. An input without a separator yields a single token equal to the
/// whole input.
pub fn tokenize(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(SEPARATOR)
}

/// A classified subject token.
///
/// Only tokens that are exactly `*` or exactly `>` are wildcards. Tokens that
/// merely contain those characters (`foo*`, `>bar`, `>>`) are literals.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// An ordinary token matching only itself.
    Literal(String),

    /// `*`: exactly one token with any value.
    SingleWildcard,

    /// `>`: one or more remaining tokens with any values.
    TailWildcard,
}

impl Token {
    /// Classify a single raw token.
    #[must_use]
    pub fn classify(token: &str) -> Self {
        match token {
            SINGLE_WILDCARD => Self::SingleWildcard,
            TAIL_WILDCARD => Self::TailWildcard,
            literal => Self::Literal(literal.to_string()),
        }
    }

    /// Whether this token is `*` or `>`.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }

    /// The textual form of the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(literal) => literal,
            Self::SingleWildcard => SINGLE_WILDCARD,
            Self::TailWildcard => TAIL_WILDCARD,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
