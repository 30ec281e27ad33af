//! Settings domain trait
//!
//! Both settings domains share one shape: initialize from a snapshot, apply a
//! single-field edit, and overlay themselves onto the host's `preferences` record.

use super::{error::PreferencesError, model::DomainKind, snapshot::PreferencesSnapshot};
use serde_json::Value;

/// A cohesive group of preference fields with its own defaults and update rules
pub trait SettingsDomain: Clone + Send + Sync + 'static {
    /// Which domain this is
    const KIND: DomainKind;

    /// Documented field keys, in snapshot order
    fn field_keys() -> Vec<&'static str>;

    /// This domain's section of a snapshot, if present
    fn section(snapshot: &PreferencesSnapshot) -> Option<&Value>;

    /// Read the domain from a possibly-partial section.
    ///
    /// Every field is taken from the section when present and well-shaped,
    /// otherwise from the default table. A non-object section yields defaults.
    fn from_section(section: &Value) -> Self;

    /// JSON object holding every field of the domain
    fn to_section(&self) -> Value;

    /// Copy of `self` with one field replaced.
    ///
    /// Fails on unknown keys and wrongly-shaped values; `self` is never modified.
    fn with_field(&self, key: &str, value: Value) -> Result<Self, PreferencesError>;

    /// Overlay this domain onto the host's existing `preferences` record,
    /// keeping every key that belongs to someone else.
    fn merge_into(&self, preferences: Option<&Value>) -> Value;
}
