//! Editing sessions - one per settings domain
//!
//! A session initializes its domain from the host snapshot, applies single-field
//! edits through the merge engine and publishes a change event for each accepted
//! edit. Sessions are owned by one caller; edits are synchronous.

use super::clock::{Clock, SystemClock};
use super::events::{ChangeSink, PreferencesChange};
use super::merge;
use super::preview::PreviewFormatter;
use super::ticker::PreviewHandle;
use crate::config::{Config, UnknownFieldPolicy};
use crate::contract::{
    GeneralSettings, NotificationCategory, NotificationChannel, NotificationSettings,
    PreferencesError, PreferencesSnapshot, SettingsDomain, PREFERENCES_KEY,
};
use chrono::{FixedOffset, NaiveTime};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use uuid::Uuid;

/// Domain-agnostic editing session
pub struct EditingSession<D: SettingsDomain> {
    id: Uuid,
    snapshot: PreferencesSnapshot,
    state: Arc<RwLock<D>>,
    sink: Arc<dyn ChangeSink>,
    policy: UnknownFieldPolicy,
}

impl<D: SettingsDomain> EditingSession<D> {
    /// Start a session from the host's snapshot
    pub fn open(snapshot: PreferencesSnapshot, sink: Arc<dyn ChangeSink>, config: &Config) -> Self {
        let state = D::from_section(D::section(&snapshot).unwrap_or(&Value::Null));
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, domain = %D::KIND, "preferences session opened");
        Self {
            id,
            snapshot,
            state: Arc::new(RwLock::new(state)),
            sink,
            policy: config.unknown_field_policy,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current settings
    pub fn settings(&self) -> D {
        self.state.read().clone()
    }

    /// Snapshot the next change will be merged under
    pub fn snapshot(&self) -> &PreferencesSnapshot {
        &self.snapshot
    }

    /// Take the host's latest authoritative record without touching local settings
    pub fn replace_snapshot(&mut self, snapshot: PreferencesSnapshot) {
        self.snapshot = snapshot;
    }

    pub(crate) fn shared_state(&self) -> Arc<RwLock<D>> {
        self.state.clone()
    }

    /// Apply one field edit and publish the merged result.
    ///
    /// Returns `Ok(None)` when an unknown key is ignored by policy.
    pub fn update(&mut self, key: &str, value: Value) -> Result<Option<PreferencesChange>, PreferencesError> {
        let next = match merge::update(&*self.state.read(), key, value) {
            Ok(next) => next,
            Err(e) if e.is_unknown_field() && self.policy == UnknownFieldPolicy::Ignore => {
                tracing::warn!(session_id = %self.id, domain = %D::KIND, key, "ignoring edit of unknown field");
                return Ok(None);
            }
            Err(e) => {
                tracing::warn!(session_id = %self.id, error = %e, "rejected preferences edit");
                return Err(e);
            }
        };

        let preferences = next.merge_into(self.snapshot.preferences());
        *self.state.write() = next;
        self.snapshot = merge::emit(&self.snapshot, PREFERENCES_KEY, preferences.clone());

        let change = PreferencesChange::new(D::KIND, self.id, key, preferences);
        tracing::debug!(session_id = %self.id, domain = %D::KIND, key, "preferences field updated");

        if let Err(e) = self.sink.publish(&change) {
            // Log error but don't fail the edit
            tracing::warn!(session_id = %self.id, error = %e, "failed to publish preferences change");
        }
        Ok(Some(change))
    }
}

// ===== General preferences =====

/// Regional/display settings session with a live timestamp preview
///
/// The session owns its preview tick: restarting replaces the running tick and
/// dropping the session cancels it.
pub struct GeneralPreferences {
    session: EditingSession<GeneralSettings>,
    clock: Arc<dyn Clock>,
    formatter: PreviewFormatter,
    preview: Arc<watch::Sender<String>>,
    interval: Duration,
    ticker: Option<PreviewHandle>,
}

impl GeneralPreferences {
    pub fn open(snapshot: PreferencesSnapshot, sink: Arc<dyn ChangeSink>, config: &Config) -> Self {
        Self::with_clock(snapshot, sink, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        snapshot: PreferencesSnapshot,
        sink: Arc<dyn ChangeSink>,
        config: &Config,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session = EditingSession::open(snapshot, sink, config);
        let formatter = PreviewFormatter::new(&config.fallback_language);
        let initial = formatter.format(&session.settings(), clock.now());
        let (preview, _) = watch::channel(initial);
        Self {
            session,
            clock,
            formatter,
            preview: Arc::new(preview),
            interval: config.preview_interval(),
            ticker: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.session.id()
    }

    pub fn settings(&self) -> GeneralSettings {
        self.session.settings()
    }

    pub fn snapshot(&self) -> &PreferencesSnapshot {
        self.session.snapshot()
    }

    pub fn replace_snapshot(&mut self, snapshot: PreferencesSnapshot) {
        self.session.replace_snapshot(snapshot);
    }

    /// Apply one field edit; the preview is recomputed when the edit is accepted
    pub fn update(&mut self, key: &str, value: Value) -> Result<Option<PreferencesChange>, PreferencesError> {
        let change = self.session.update(key, value)?;
        if change.is_some() {
            self.refresh_preview();
        }
        Ok(change)
    }

    /// Latest rendered preview
    pub fn preview(&self) -> String {
        self.preview.borrow().clone()
    }

    /// Receiver that observes every preview recomputation
    pub fn subscribe_preview(&self) -> watch::Receiver<String> {
        self.preview.subscribe()
    }

    /// Resample the clock and re-render now
    pub fn refresh_preview(&self) -> String {
        render_preview(&self.session.shared_state(), self.clock.as_ref(), &self.formatter, &self.preview)
    }

    /// Start resampling the clock every tick, replacing any running tick.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_preview(&mut self) {
        if let Some(previous) = self.ticker.take() {
            tracing::debug!(session_id = %self.id(), "replacing running preview clock");
            drop(previous);
        }

        let state = self.session.shared_state();
        let clock = self.clock.clone();
        let formatter = self.formatter;
        let preview = self.preview.clone();
        tracing::info!(session_id = %self.id(), "starting preferences preview clock");
        self.ticker = Some(PreviewHandle::spawn(self.interval, move || {
            render_preview(&state, clock.as_ref(), &formatter, &preview);
        }));
    }

    /// Stop the preview tick and wait until no further recomputation can happen
    pub async fn stop_preview(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop().await;
            tracing::debug!(session_id = %self.id(), "preferences preview clock stopped");
        }
    }

    pub fn is_previewing(&self) -> bool {
        self.ticker.as_ref().is_some_and(PreviewHandle::is_running)
    }
}

fn render_preview(
    state: &RwLock<GeneralSettings>,
    clock: &dyn Clock,
    formatter: &PreviewFormatter,
    preview: &watch::Sender<String>,
) -> String {
    let settings = state.read().clone();
    let text = formatter.format(&settings, clock.now());
    preview.send_replace(text.clone());
    text
}

// ===== Notification preferences =====

/// Notification settings session with quiet-hours evaluation
pub struct NotificationPreferences {
    session: EditingSession<NotificationSettings>,
    clock: Arc<dyn Clock>,
}

impl NotificationPreferences {
    pub fn open(snapshot: PreferencesSnapshot, sink: Arc<dyn ChangeSink>, config: &Config) -> Self {
        Self::with_clock(snapshot, sink, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        snapshot: PreferencesSnapshot,
        sink: Arc<dyn ChangeSink>,
        config: &Config,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            session: EditingSession::open(snapshot, sink, config),
            clock,
        }
    }

    pub fn id(&self) -> Uuid {
        self.session.id()
    }

    pub fn settings(&self) -> NotificationSettings {
        self.session.settings()
    }

    pub fn snapshot(&self) -> &PreferencesSnapshot {
        self.session.snapshot()
    }

    pub fn replace_snapshot(&mut self, snapshot: PreferencesSnapshot) {
        self.session.replace_snapshot(snapshot);
    }

    pub fn update(&mut self, key: &str, value: Value) -> Result<Option<PreferencesChange>, PreferencesError> {
        self.session.update(key, value)
    }

    /// Whether quiet hours are in effect at time of day `t`
    pub fn quiet_hours_active_at(&self, t: NaiveTime) -> bool {
        self.session.state.read().quiet_hours_active(t)
    }

    /// Whether quiet hours are in effect right now at the user's `offset`
    pub fn quiet_hours_active_now(&self, offset: FixedOffset) -> bool {
        self.quiet_hours_active_at(self.local_time(offset))
    }

    /// Delivery gate for a notification right now at the user's `offset`
    pub fn should_notify_now(
        &self,
        channel: NotificationChannel,
        category: NotificationCategory,
        offset: FixedOffset,
    ) -> bool {
        let t = self.local_time(offset);
        self.session.state.read().should_notify(channel, category, t)
    }

    fn local_time(&self, offset: FixedOffset) -> NaiveTime {
        self.clock.now().with_timezone(&offset).time()
    }
}
