//! User identifier shared by the social graph and the topic store.

use std::borrow::Borrow;
use serde::{Deserialize, Serialize};

/// Opaque user identifier.
///
/// The same literal string is the graph node id and the topic-store key.
/// The two id spaces are not guaranteed to overlap fully.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Lets hash maps keyed by `UserId` be queried with a plain `&str`.
impl Borrow<str> for UserId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(UserId::from("1001"), 7);
        assert_eq!(map.get("1001"), Some(&7));
        assert_eq!(map.get("1002"), None);
    }

    #[test]
    fn test_display_is_literal_id() {
        assert_eq!(UserId::new("210****495").to_string(), "210****495");
    }
}
