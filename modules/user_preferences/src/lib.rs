//! User Preferences Module
//!
//! Editing core for a user's regional/display and notification settings.
//! Sessions accept single-field edits, derive a live timestamp preview and a
//! quiet-hours check, and publish a mergeable change event for the host to persist.

// Public exports
pub mod contract;
pub use contract::{
    DateFormat, DomainKind, GeneralSettings, NotificationSettings, PreferencesError,
    PreferencesSnapshot, SettingsDomain, TimeFormat,
};

pub mod config;
pub use config::{Config, UnknownFieldPolicy};

pub mod domain;
pub use domain::{ChangeSink, GeneralPreferences, NotificationPreferences, PreferencesChange};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod infra;
