//! Host-owned preferences record
//!
//! The core never assumes exhaustive knowledge of the snapshot's keys. It reads a
//! documented subset and writes back a merged whole.

use serde_json::{Map, Value};

/// Top-level key holding general settings and the notifications sub-record
pub const PREFERENCES_KEY: &str = "preferences";
/// Key of the notifications sub-record inside `preferences`
pub const NOTIFICATIONS_KEY: &str = "notifications";

/// Full set of a user's preferences as a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesSnapshot(Map<String, Value>);

impl PreferencesSnapshot {
    /// Empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any JSON value; non-objects become an empty snapshot
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            other => {
                tracing::debug!(kind = ?other, "snapshot is not a JSON object, using empty snapshot");
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `preferences` sub-record, if present
    pub fn preferences(&self) -> Option<&Value> {
        self.0.get(PREFERENCES_KEY)
    }

    /// The `preferences.notifications` sub-record, if present
    pub fn notifications(&self) -> Option<&Value> {
        self.preferences()
            .and_then(|prefs| prefs.get(NOTIFICATIONS_KEY))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Shallow merge: every top-level key of `partial` replaces the same key here
    pub fn merge(&self, partial: &PreferencesSnapshot) -> PreferencesSnapshot {
        let mut merged = self.0.clone();
        for (key, value) in &partial.0 {
            merged.insert(key.clone(), value.clone());
        }
        Self(merged)
    }
}

impl From<Map<String, Value>> for PreferencesSnapshot {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for PreferencesSnapshot {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<PreferencesSnapshot> for Value {
    fn from(snapshot: PreferencesSnapshot) -> Self {
        snapshot.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_is_empty() {
        assert_eq!(PreferencesSnapshot::from_value(json!(null)), PreferencesSnapshot::new());
        assert_eq!(PreferencesSnapshot::from_value(json!([1, 2])), PreferencesSnapshot::new());
        assert!(PreferencesSnapshot::from_value(json!("x")).preferences().is_none());
    }

    #[test]
    fn test_notifications_lookup() {
        let snapshot = PreferencesSnapshot::from(json!({
            "preferences": { "notifications": { "email": false } }
        }));
        assert_eq!(snapshot.notifications(), Some(&json!({ "email": false })));

        let snapshot = PreferencesSnapshot::from(json!({ "preferences": "broken" }));
        assert!(snapshot.notifications().is_none());
    }

    #[test]
    fn test_merge_is_shallow() {
        let base = PreferencesSnapshot::from(json!({
            "name": "Ada",
            "preferences": { "language": "en", "notifications": { "email": true } }
        }));
        let partial = PreferencesSnapshot::from(json!({
            "preferences": { "language": "fr" }
        }));

        let merged = base.merge(&partial);
        assert_eq!(
            merged.into_value(),
            json!({ "name": "Ada", "preferences": { "language": "fr" } })
        );
    }
}
