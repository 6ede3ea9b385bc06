//! Name patterns: literal names or `*`-wildcard patterns over qualified
//! `target::operation` names.

use crate::errors::AttributeError;

/// A literal name or a wildcard pattern.
///
/// `*` matches any run of characters (including an empty one) and may appear
/// more than once. A pattern without `*` only ever matches itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamePattern {
    Literal(String),
    Wildcard {
        raw: String,
        /// Literal fragments between stars, in order. Leading/trailing stars
        /// leave empty fragments at the ends.
        segments: Vec<String>,
    },
}

impl NamePattern {
    pub fn parse(raw: &str) -> Result<Self, AttributeError> {
        if raw.is_empty() {
            return Err(AttributeError::InvalidPattern(
                "empty pattern".to_string(),
            ));
        }
        if !raw.contains('*') {
            return Ok(Self::Literal(raw.to_string()));
        }
        Ok(Self::Wildcard {
            raw: raw.to_string(),
            segments: raw.split('*').map(str::to_string).collect(),
        })
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub fn raw(&self) -> &str {
        match self {
            Self::Literal(lit) => lit,
            Self::Wildcard { raw, .. } => raw,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Literal(lit) => lit == name,
            Self::Wildcard { segments, .. } => {
                let last = segments.len() - 1;
                let mut rest = name;
                for (idx, segment) in segments.iter().enumerate() {
                    if idx == 0 {
                        match rest.strip_prefix(segment.as_str()) {
                            Some(stripped) => rest = stripped,
                            None => return false,
                        }
                    } else if idx == last {
                        if !rest.ends_with(segment.as_str()) {
                            return false;
                        }
                    } else {
                        match rest.find(segment.as_str()) {
                            Some(pos) => rest = &rest[pos + segment.len()..],
                            None => return false,
                        }
                    }
                }
                true
            }
        }
    }

    /// Length of the literal prefix before the first star. Literal patterns
    /// rank above every wildcard, so their prefix length is never compared.
    pub fn prefix_len(&self) -> usize {
        match self {
            Self::Literal(lit) => lit.len(),
            Self::Wildcard { segments, .. } => segments[0].len(),
        }
    }

    /// Total number of literal (non-star) characters in the pattern.
    pub fn literal_len(&self) -> usize {
        match self {
            Self::Literal(lit) => lit.len(),
            Self::Wildcard { segments, .. } => segments.iter().map(String::len).sum(),
        }
    }
}

impl std::fmt::Display for NamePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}
