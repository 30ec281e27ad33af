//! Contract models for user preferences
//!
//! These models are transport-agnostic and used by editing sessions and hosts.
//! NO serde derives - JSON mapping lives in `infra::snapshot::mapper`.

use chrono::NaiveTime;
use std::fmt;

/// Settings domain a change belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// Regional and display settings stored directly under `preferences`
    General,
    /// Notification settings stored under `preferences.notifications`
    Notifications,
}

impl DomainKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Notifications => "notifications",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Date layout selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `MM/DD/YYYY`
    #[default]
    MonthFirst,
    /// `DD/MM/YYYY`
    DayFirst,
}

impl DateFormat {
    pub const ALL: [DateFormat; 2] = [DateFormat::MonthFirst, DateFormat::DayFirst];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MonthFirst => "MM/DD/YYYY",
            Self::DayFirst => "DD/MM/YYYY",
        }
    }

    /// Parse a wire label; `None` for anything outside the supported set
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }

    /// Whether the month token leads the layout (numeric month rendering)
    pub fn is_month_first(&self) -> bool {
        self.as_str().starts_with("MM")
    }
}

/// Hour cycle selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// 12-hour clock with an AM/PM marker
    #[default]
    TwelveHour,
    /// 24-hour clock
    TwentyFourHour,
}

impl TimeFormat {
    pub const ALL: [TimeFormat; 2] = [TimeFormat::TwelveHour, TimeFormat::TwentyFourHour];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TwelveHour => "12h",
            Self::TwentyFourHour => "24h",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }
}

/// Regional and display settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralSettings {
    /// Locale code (e.g. "en", "fr", "pt-BR")
    pub language: String,
    /// UTC offset label (e.g. "UTC+05:30"); "UTC" means zero offset
    pub timezone: String,
    pub date_format: DateFormat,
    pub time_format: TimeFormat,
    /// Free-form country text
    pub country: String,
    /// Currency code (e.g. "USD")
    pub currency: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            date_format: DateFormat::MonthFirst,
            time_format: TimeFormat::TwelveHour,
            country: String::new(),
            currency: "USD".to_string(),
        }
    }
}

/// Field names of [`GeneralSettings`] as they appear in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralField {
    Language,
    Timezone,
    DateFormat,
    TimeFormat,
    Country,
    Currency,
}

impl GeneralField {
    pub const ALL: [GeneralField; 6] = [
        GeneralField::Language,
        GeneralField::Timezone,
        GeneralField::DateFormat,
        GeneralField::TimeFormat,
        GeneralField::Country,
        GeneralField::Currency,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Timezone => "timezone",
            Self::DateFormat => "dateFormat",
            Self::TimeFormat => "timeFormat",
            Self::Country => "country",
            Self::Currency => "currency",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Notification channel, category and quiet-hours settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sound: bool,
    pub desktop: bool,
    pub marketing: bool,
    pub security: bool,
    pub friends: bool,
    pub messages: bool,
    pub calls: bool,
    pub do_not_disturb: bool,
    pub quiet_hours_start: NaiveTime,
    pub quiet_hours_end: NaiveTime,
    /// Always within `0..=100`
    pub sound_volume: u8,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sound: true,
            desktop: true,
            marketing: false,
            security: true,
            friends: true,
            messages: true,
            calls: true,
            do_not_disturb: false,
            quiet_hours_start: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default(),
            quiet_hours_end: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            sound_volume: 50,
        }
    }
}

/// Field names of [`NotificationSettings`] as they appear in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationField {
    Email,
    Push,
    Sound,
    Desktop,
    Marketing,
    Security,
    Friends,
    Messages,
    Calls,
    DoNotDisturb,
    QuietHoursStart,
    QuietHoursEnd,
    SoundVolume,
}

impl NotificationField {
    pub const ALL: [NotificationField; 13] = [
        NotificationField::Email,
        NotificationField::Push,
        NotificationField::Sound,
        NotificationField::Desktop,
        NotificationField::Marketing,
        NotificationField::Security,
        NotificationField::Friends,
        NotificationField::Messages,
        NotificationField::Calls,
        NotificationField::DoNotDisturb,
        NotificationField::QuietHoursStart,
        NotificationField::QuietHoursEnd,
        NotificationField::SoundVolume,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Push => "push",
            Self::Sound => "sound",
            Self::Desktop => "desktop",
            Self::Marketing => "marketing",
            Self::Security => "security",
            Self::Friends => "friends",
            Self::Messages => "messages",
            Self::Calls => "calls",
            Self::DoNotDisturb => "doNotDisturb",
            Self::QuietHoursStart => "quietHoursStart",
            Self::QuietHoursEnd => "quietHoursEnd",
            Self::SoundVolume => "soundVolume",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Delivery channel for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    Email,
    Push,
    Desktop,
}

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationCategory {
    Marketing,
    Security,
    Friends,
    Messages,
    Calls,
}

/// A selectable option supplied by the option catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    /// Value stored in the snapshot
    pub code: &'static str,
    /// Human readable label
    pub label: &'static str,
}
