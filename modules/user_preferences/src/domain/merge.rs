//! Merge/update engine
//!
//! `update` replaces one field of a settings domain; `emit` shallow-merges a
//! domain record back into the host snapshot.

use super::validation::{
    expect_bool, expect_date_format, expect_string, expect_time_format, expect_time_of_day,
    expect_volume,
};
use crate::contract::{
    DomainKind, GeneralField, GeneralSettings, NotificationField, NotificationSettings,
    PreferencesError, PreferencesSnapshot, SettingsDomain, NOTIFICATIONS_KEY,
};
use crate::infra::snapshot::{general_from_section, notifications_from_section};
use serde_json::{Map, Value};

/// Return a copy of `state` with `key` set to `value`
pub fn update<D: SettingsDomain>(state: &D, key: &str, value: Value) -> Result<D, PreferencesError> {
    state.with_field(key, value)
}

/// Replace `outer[domain_key]` with `state`, leaving every other top-level key untouched
pub fn emit(outer: &PreferencesSnapshot, domain_key: &str, state: Value) -> PreferencesSnapshot {
    let mut merged = outer.as_map().clone();
    merged.insert(domain_key.to_string(), state);
    PreferencesSnapshot::from(merged)
}

/// Existing `preferences` object, or an empty one when absent or not an object
fn preferences_object(preferences: Option<&Value>) -> Map<String, Value> {
    match preferences {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

impl SettingsDomain for GeneralSettings {
    const KIND: DomainKind = DomainKind::General;

    fn field_keys() -> Vec<&'static str> {
        GeneralField::ALL.iter().map(|f| f.key()).collect()
    }

    fn section(snapshot: &PreferencesSnapshot) -> Option<&Value> {
        snapshot.preferences()
    }

    fn from_section(section: &Value) -> Self {
        general_from_section(Some(section))
    }

    fn to_section(&self) -> Value {
        Value::Object(self.into())
    }

    fn with_field(&self, key: &str, value: Value) -> Result<Self, PreferencesError> {
        const D: DomainKind = DomainKind::General;
        let field = GeneralField::parse(key).ok_or_else(|| PreferencesError::unknown_field(D, key))?;

        let mut next = self.clone();
        match field {
            GeneralField::Language => next.language = expect_string(D, key, &value)?,
            GeneralField::Timezone => next.timezone = expect_string(D, key, &value)?,
            GeneralField::DateFormat => next.date_format = expect_date_format(D, key, &value)?,
            GeneralField::TimeFormat => next.time_format = expect_time_format(D, key, &value)?,
            GeneralField::Country => next.country = expect_string(D, key, &value)?,
            GeneralField::Currency => next.currency = expect_string(D, key, &value)?,
        }
        Ok(next)
    }

    fn merge_into(&self, preferences: Option<&Value>) -> Value {
        let mut merged = preferences_object(preferences);
        let own: Map<String, Value> = self.into();
        merged.extend(own);
        Value::Object(merged)
    }
}

impl SettingsDomain for NotificationSettings {
    const KIND: DomainKind = DomainKind::Notifications;

    fn field_keys() -> Vec<&'static str> {
        NotificationField::ALL.iter().map(|f| f.key()).collect()
    }

    fn section(snapshot: &PreferencesSnapshot) -> Option<&Value> {
        snapshot.notifications()
    }

    fn from_section(section: &Value) -> Self {
        notifications_from_section(Some(section))
    }

    fn to_section(&self) -> Value {
        Value::Object(self.into())
    }

    fn with_field(&self, key: &str, value: Value) -> Result<Self, PreferencesError> {
        const D: DomainKind = DomainKind::Notifications;
        let field =
            NotificationField::parse(key).ok_or_else(|| PreferencesError::unknown_field(D, key))?;

        let mut next = self.clone();
        match field {
            NotificationField::Email => next.email = expect_bool(D, key, &value)?,
            NotificationField::Push => next.push = expect_bool(D, key, &value)?,
            NotificationField::Sound => next.sound = expect_bool(D, key, &value)?,
            NotificationField::Desktop => next.desktop = expect_bool(D, key, &value)?,
            NotificationField::Marketing => next.marketing = expect_bool(D, key, &value)?,
            NotificationField::Security => next.security = expect_bool(D, key, &value)?,
            NotificationField::Friends => next.friends = expect_bool(D, key, &value)?,
            NotificationField::Messages => next.messages = expect_bool(D, key, &value)?,
            NotificationField::Calls => next.calls = expect_bool(D, key, &value)?,
            NotificationField::DoNotDisturb => next.do_not_disturb = expect_bool(D, key, &value)?,
            NotificationField::QuietHoursStart => {
                next.quiet_hours_start = expect_time_of_day(D, key, &value)?
            }
            NotificationField::QuietHoursEnd => {
                next.quiet_hours_end = expect_time_of_day(D, key, &value)?
            }
            NotificationField::SoundVolume => next.sound_volume = expect_volume(D, key, &value)?,
        }
        Ok(next)
    }

    fn merge_into(&self, preferences: Option<&Value>) -> Value {
        let mut merged = preferences_object(preferences);
        merged.insert(NOTIFICATIONS_KEY.to_string(), self.to_section());
        Value::Object(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_value(key: &str) -> Value {
        match key {
            "language" => json!("de"),
            "timezone" => json!("UTC+05:30"),
            "dateFormat" => json!("DD/MM/YYYY"),
            "timeFormat" => json!("24h"),
            "country" => json!("Germany"),
            "currency" => json!("EUR"),
            "quietHoursStart" => json!("21:30"),
            "quietHoursEnd" => json!("06:45"),
            "soundVolume" => json!(75),
            "marketing" | "doNotDisturb" => json!(true),
            _ => json!(false),
        }
    }

    fn assert_update_touches_only_key<D: SettingsDomain>(state: &D)
    where
        D: std::fmt::Debug,
    {
        let before = state.to_section();
        for key in D::field_keys() {
            let value = sample_value(key);
            let next = update(state, key, value.clone()).unwrap();
            let after = next.to_section();

            assert_eq!(after[key], value, "read-back of {}", key);
            for other in D::field_keys().into_iter().filter(|k| *k != key) {
                assert_eq!(after[other], before[other], "{} changed while updating {}", other, key);
            }
        }
    }

    #[test]
    fn test_update_reads_back_general() {
        assert_update_touches_only_key(&GeneralSettings::default());
    }

    #[test]
    fn test_update_reads_back_notifications() {
        assert_update_touches_only_key(&NotificationSettings::default());
    }

    #[test]
    fn test_update_rejects_unknown_key() {
        let state = GeneralSettings::default();
        let err = update(&state, "theme", json!("dark")).unwrap_err();
        assert!(err.is_unknown_field());

        let state = NotificationSettings::default();
        let err = update(&state, "sms", json!(true)).unwrap_err();
        assert_eq!(
            err,
            PreferencesError::UnknownField {
                domain: DomainKind::Notifications,
                key: "sms".to_string()
            }
        );
    }

    #[test]
    fn test_update_rejects_wrong_shape() {
        let state = NotificationSettings::default();
        assert!(update(&state, "email", json!("yes")).is_err());
        assert!(update(&state, "quietHoursStart", json!("25:00")).is_err());
        assert!(update(&GeneralSettings::default(), "timeFormat", json!("36h")).is_err());
    }

    #[test]
    fn test_update_clamps_volume() {
        let state = NotificationSettings::default();
        assert_eq!(update(&state, "soundVolume", json!(-5)).unwrap().sound_volume, 0);
        assert_eq!(update(&state, "soundVolume", json!(150)).unwrap().sound_volume, 100);
        assert_eq!(update(&state, "soundVolume", json!(42)).unwrap().sound_volume, 42);
    }

    #[test]
    fn test_emit_preserves_sibling_keys() {
        let outer = PreferencesSnapshot::from(json!({ "preferences": { "a": 1 }, "other": 2 }));
        let emitted = emit(&outer, "preferences", json!({ "a": 9 }));
        assert_eq!(emitted.into_value(), json!({ "preferences": { "a": 9 }, "other": 2 }));
    }

    #[test]
    fn test_emit_adds_missing_domain_key() {
        let outer = PreferencesSnapshot::from(json!({ "other": 2 }));
        let emitted = emit(&outer, "preferences", json!({ "a": 9 }));
        assert_eq!(emitted.into_value(), json!({ "preferences": { "a": 9 }, "other": 2 }));
    }

    #[test]
    fn test_general_merge_keeps_notifications() {
        let prefs = json!({ "language": "en", "notifications": { "email": false }, "theme": "dark" });
        let mut settings = GeneralSettings::default();
        settings.language = "es".to_string();

        let merged = settings.merge_into(Some(&prefs));
        assert_eq!(merged["language"], json!("es"));
        assert_eq!(merged["notifications"], json!({ "email": false }));
        assert_eq!(merged["theme"], json!("dark"));
        assert_eq!(merged["currency"], json!("USD"));
    }

    #[test]
    fn test_notifications_merge_replaces_only_sub_record() {
        let prefs = json!({ "language": "it", "notifications": { "email": false, "legacy": 1 } });
        let merged = NotificationSettings::default().merge_into(Some(&prefs));

        assert_eq!(merged["language"], json!("it"));
        assert_eq!(merged["notifications"]["email"], json!(true));
        assert!(merged["notifications"].get("legacy").is_none());
    }

    #[test]
    fn test_from_section_reads_each_domain() {
        let snapshot = PreferencesSnapshot::from(json!({
            "preferences": { "currency": "JPY", "notifications": { "calls": false } }
        }));

        let general = GeneralSettings::from_section(GeneralSettings::section(&snapshot).unwrap());
        assert_eq!(general.currency, "JPY");

        let notifications =
            NotificationSettings::from_section(NotificationSettings::section(&snapshot).unwrap());
        assert!(!notifications.calls);

        assert_eq!(GeneralSettings::from_section(&json!("garbage")), GeneralSettings::default());
        assert!(NotificationSettings::section(&PreferencesSnapshot::new()).is_none());
    }
}
