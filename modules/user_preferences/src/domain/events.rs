//! Change events for preference edits
//!
//! Every accepted field edit produces one event carrying the partial snapshot
//! `{ "preferences": ... }` the host should merge and persist:
//! - General edits overlay the six regional keys onto the existing `preferences`
//! - Notification edits replace `preferences.notifications`
//! - Sibling keys of the original snapshot are carried through untouched

use crate::contract::{DomainKind, PreferencesSnapshot, PREFERENCES_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Domain event emitted after a field edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "domain", rename_all = "snake_case")]
pub enum PreferencesChange {
    /// A general (regional/display) field changed
    General(PreferencesChangedEvent),
    /// A notification field changed
    Notifications(PreferencesChangedEvent),
}

/// Event data for a field edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencesChangedEvent {
    /// Editing session that produced the change
    pub session_id: Uuid,
    /// Snapshot key of the edited field
    pub field: String,
    /// Merged `preferences` record
    pub preferences: Value,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl PreferencesChange {
    /// Create a change event for `domain`
    pub fn new(domain: DomainKind, session_id: Uuid, field: &str, preferences: Value) -> Self {
        let event = PreferencesChangedEvent {
            session_id,
            field: field.to_string(),
            preferences,
            timestamp: Utc::now(),
        };
        match domain {
            DomainKind::General => Self::General(event),
            DomainKind::Notifications => Self::Notifications(event),
        }
    }

    pub fn domain(&self) -> DomainKind {
        match self {
            Self::General(_) => DomainKind::General,
            Self::Notifications(_) => DomainKind::Notifications,
        }
    }

    pub fn event(&self) -> &PreferencesChangedEvent {
        match self {
            Self::General(e) | Self::Notifications(e) => e,
        }
    }

    /// `{ "preferences": <merged record> }`, ready for `PreferencesSnapshot::merge`
    pub fn partial_snapshot(&self) -> PreferencesSnapshot {
        let mut map = Map::new();
        map.insert(PREFERENCES_KEY.to_string(), self.event().preferences.clone());
        PreferencesSnapshot::from(map)
    }
}

impl PreferencesSnapshot {
    /// Host-side merge of a change into this authoritative record
    pub fn apply(&self, change: &PreferencesChange) -> PreferencesSnapshot {
        self.merge(&change.partial_snapshot())
    }
}

/// Receiver of change events, supplied by the host
///
/// Called synchronously after every accepted edit, possibly many times in quick
/// succession. Debouncing and persistence belong to the implementation.
pub trait ChangeSink: Send + Sync {
    fn publish(&self, change: &PreferencesChange) -> anyhow::Result<()>;
}

/// No-op sink for testing or when the host does not listen
pub struct NoOpChangeSink;

impl ChangeSink for NoOpChangeSink {
    fn publish(&self, _change: &PreferencesChange) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Sink backed by a closure
pub struct CallbackSink<F>(F);

impl<F> CallbackSink<F>
where
    F: Fn(&PreferencesChange) -> anyhow::Result<()> + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self(callback)
    }
}

impl<F> ChangeSink for CallbackSink<F>
where
    F: Fn(&PreferencesChange) -> anyhow::Result<()> + Send + Sync,
{
    fn publish(&self, change: &PreferencesChange) -> anyhow::Result<()> {
        (self.0)(change)
    }
}
