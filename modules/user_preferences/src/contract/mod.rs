//! Contract layer - public types shared by sessions and hosts
//!
//! This layer contains transport-agnostic models, the error type and the
//! settings domain trait.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;
pub mod settings;
pub mod snapshot;

pub use error::PreferencesError;
pub use model::{
    DateFormat, DomainKind, GeneralField, GeneralSettings, NotificationCategory,
    NotificationChannel, NotificationField, NotificationSettings, OptionEntry, TimeFormat,
};
pub use settings::SettingsDomain;
pub use snapshot::{PreferencesSnapshot, NOTIFICATIONS_KEY, PREFERENCES_KEY};
