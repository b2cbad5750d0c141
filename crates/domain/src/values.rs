//! Coercion of raw workflow parameter text into lookup keys.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a raw parameter value as an entity lookup key.
///
/// A value is tried as a GUID first; failing that, as one or more integer
/// row ids separated by commas, pipes, semicolons, or newlines. Tokens that
/// parse as neither are skipped rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKey {
    /// A single GUID identity.
    Guid(Uuid),
    /// One or more integer row ids.
    Ids(Vec<i32>),
}

impl EntityKey {
    /// Parses a raw parameter value, returning `None` for blank input or
    /// input that yields neither a GUID nor any integer id.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(guid) = Uuid::parse_str(trimmed) {
            return Some(Self::Guid(guid));
        }

        let ids: Vec<i32> = trimmed
            .split(['|', ',', ';', '\n'])
            .filter_map(|token| token.trim().parse::<i32>().ok())
            .collect();

        (!ids.is_empty()).then_some(Self::Ids(ids))
    }
}

/// Lenient boolean coercion used by text-or-attribute flag parameters.
/// Accepts "true", "t", "yes", "y", and "1" in any casing; anything else,
/// including blank input, is false.
#[must_use]
pub fn lenient_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "t" | "yes" | "y" | "1"
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use uuid::Uuid;

    use super::{EntityKey, lenient_bool};

    #[test]
    fn guid_input_classifies_as_guid() {
        let guid = Uuid::new_v4();
        assert_eq!(
            EntityKey::parse(&guid.to_string()),
            Some(EntityKey::Guid(guid))
        );
    }

    #[test]
    fn delimited_ids_skip_non_numeric_tokens() {
        assert_eq!(
            EntityKey::parse("12, x, 34|56"),
            Some(EntityKey::Ids(vec![12, 34, 56]))
        );
    }

    #[test]
    fn blank_and_unparsable_input_yield_nothing() {
        assert_eq!(EntityKey::parse("   "), None);
        assert_eq!(EntityKey::parse("not-a-key"), None);
    }

    #[test]
    fn lenient_bool_accepts_common_truthy_spellings() {
        assert!(lenient_bool("True"));
        assert!(lenient_bool(" y "));
        assert!(lenient_bool("1"));
        assert!(!lenient_bool("false"));
        assert!(!lenient_bool(""));
    }

    proptest! {
        #[test]
        fn joined_id_lists_round_trip(ids in prop::collection::vec(0i32..100_000, 1..8)) {
            let joined = ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");

            prop_assert_eq!(EntityKey::parse(&joined), Some(EntityKey::Ids(ids)));
        }
    }
}
