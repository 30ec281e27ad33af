//! Snapshot section to model mappers
//!
//! Conversions between JSON snapshot sections and contract models. Reading is
//! lenient field-by-field: a missing or wrongly-shaped value falls back to the
//! field's default without affecting its neighbours.

use crate::contract::{
    DomainKind, GeneralField, GeneralSettings, NotificationField, NotificationSettings,
};
use crate::domain::validation::{
    expect_bool, expect_date_format, expect_string, expect_time_format, expect_time_of_day,
    expect_volume, format_time_of_day,
};
use serde_json::{Map, Value};

// ===== General settings =====

/// Read general settings from the `preferences` section
pub fn general_from_section(section: Option<&Value>) -> GeneralSettings {
    const D: DomainKind = DomainKind::General;
    let defaults = GeneralSettings::default();
    let field = |f: GeneralField| section.and_then(|s| s.get(f.key())).map(|v| (f.key(), v));

    GeneralSettings {
        language: field(GeneralField::Language)
            .and_then(|(k, v)| expect_string(D, k, v).ok())
            .unwrap_or(defaults.language),
        timezone: field(GeneralField::Timezone)
            .and_then(|(k, v)| expect_string(D, k, v).ok())
            .unwrap_or(defaults.timezone),
        date_format: field(GeneralField::DateFormat)
            .and_then(|(k, v)| expect_date_format(D, k, v).ok())
            .unwrap_or(defaults.date_format),
        time_format: field(GeneralField::TimeFormat)
            .and_then(|(k, v)| expect_time_format(D, k, v).ok())
            .unwrap_or(defaults.time_format),
        country: field(GeneralField::Country)
            .and_then(|(k, v)| expect_string(D, k, v).ok())
            .unwrap_or(defaults.country),
        currency: field(GeneralField::Currency)
            .and_then(|(k, v)| expect_string(D, k, v).ok())
            .unwrap_or(defaults.currency),
    }
}

impl From<&GeneralSettings> for Map<String, Value> {
    fn from(settings: &GeneralSettings) -> Self {
        let mut map = Map::new();
        for field in GeneralField::ALL {
            let value = match field {
                GeneralField::Language => Value::from(settings.language.clone()),
                GeneralField::Timezone => Value::from(settings.timezone.clone()),
                GeneralField::DateFormat => Value::from(settings.date_format.as_str()),
                GeneralField::TimeFormat => Value::from(settings.time_format.as_str()),
                GeneralField::Country => Value::from(settings.country.clone()),
                GeneralField::Currency => Value::from(settings.currency.clone()),
            };
            map.insert(field.key().to_string(), value);
        }
        map
    }
}

// ===== Notification settings =====

/// Read notification settings from the `preferences.notifications` section
pub fn notifications_from_section(section: Option<&Value>) -> NotificationSettings {
    const D: DomainKind = DomainKind::Notifications;
    let defaults = NotificationSettings::default();
    let field = |f: NotificationField| section.and_then(|s| s.get(f.key())).map(|v| (f.key(), v));
    let flag = |f: NotificationField, default: bool| {
        field(f)
            .and_then(|(k, v)| expect_bool(D, k, v).ok())
            .unwrap_or(default)
    };

    NotificationSettings {
        email: flag(NotificationField::Email, defaults.email),
        push: flag(NotificationField::Push, defaults.push),
        sound: flag(NotificationField::Sound, defaults.sound),
        desktop: flag(NotificationField::Desktop, defaults.desktop),
        marketing: flag(NotificationField::Marketing, defaults.marketing),
        security: flag(NotificationField::Security, defaults.security),
        friends: flag(NotificationField::Friends, defaults.friends),
        messages: flag(NotificationField::Messages, defaults.messages),
        calls: flag(NotificationField::Calls, defaults.calls),
        do_not_disturb: flag(NotificationField::DoNotDisturb, defaults.do_not_disturb),
        quiet_hours_start: field(NotificationField::QuietHoursStart)
            .and_then(|(k, v)| expect_time_of_day(D, k, v).ok())
            .unwrap_or(defaults.quiet_hours_start),
        quiet_hours_end: field(NotificationField::QuietHoursEnd)
            .and_then(|(k, v)| expect_time_of_day(D, k, v).ok())
            .unwrap_or(defaults.quiet_hours_end),
        sound_volume: field(NotificationField::SoundVolume)
            .and_then(|(k, v)| expect_volume(D, k, v).ok())
            .unwrap_or(defaults.sound_volume),
    }
}

impl From<&NotificationSettings> for Map<String, Value> {
    fn from(settings: &NotificationSettings) -> Self {
        let mut map = Map::new();
        for field in NotificationField::ALL {
            let value = match field {
                NotificationField::Email => Value::from(settings.email),
                NotificationField::Push => Value::from(settings.push),
                NotificationField::Sound => Value::from(settings.sound),
                NotificationField::Desktop => Value::from(settings.desktop),
                NotificationField::Marketing => Value::from(settings.marketing),
                NotificationField::Security => Value::from(settings.security),
                NotificationField::Friends => Value::from(settings.friends),
                NotificationField::Messages => Value::from(settings.messages),
                NotificationField::Calls => Value::from(settings.calls),
                NotificationField::DoNotDisturb => Value::from(settings.do_not_disturb),
                NotificationField::QuietHoursStart => {
                    Value::from(format_time_of_day(settings.quiet_hours_start))
                }
                NotificationField::QuietHoursEnd => {
                    Value::from(format_time_of_day(settings.quiet_hours_end))
                }
                NotificationField::SoundVolume => Value::from(settings.sound_volume),
            };
            map.insert(field.key().to_string(), value);
        }
        map
    }
}
