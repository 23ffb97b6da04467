//! Article identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an article in a citation graph.
///
/// Carries no meaning beyond identity. Ordering follows the wrapped
/// integer, which is what makes graph enumeration deterministic.
///
/// # Examples
///
/// ```
/// use citegraph_core::ArticleId;
///
/// let id = ArticleId::new(4);
/// assert_eq!(id.get(), 4);
/// assert_eq!(id.to_string(), "4");
/// assert_eq!("4".parse::<ArticleId>().unwrap(), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(i64);

impl ArticleId {
    /// Creates an article id from its integer value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ArticleId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

// Untyped integer literals fall back to i32.
impl From<i32> for ArticleId {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<u32> for ArticleId {
    fn from(value: u32) -> Self {
        Self(i64::from(value))
    }
}

impl From<ArticleId> for i64 {
    fn from(id: ArticleId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ArticleId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_article_id_ordering() {
        let mut ids = vec![ArticleId::new(3), ArticleId::new(-1), ArticleId::new(2)];
        ids.sort();
        assert_eq!(
            ids,
            vec![ArticleId::new(-1), ArticleId::new(2), ArticleId::new(3)]
        );
    }

    #[test]
    fn test_article_id_parse_trims_whitespace() {
        assert_eq!(" 12 ".parse::<ArticleId>().unwrap(), ArticleId::new(12));
    }

    #[test]
    fn test_article_id_parse_rejects_garbage() {
        assert!("twelve".parse::<ArticleId>().is_err());
    }

    #[test]
    fn test_article_id_serializes_as_integer() {
        let json = serde_json::to_string(&ArticleId::new(5)).unwrap();
        assert_eq!(json, "5");
    }

    proptest! {
        #[test]
        fn test_article_id_display_parse_roundtrip(value in any::<i64>()) {
            let id = ArticleId::new(value);
            let parsed: ArticleId = id.to_string().parse().unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}
