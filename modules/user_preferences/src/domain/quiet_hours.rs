//! Quiet-hours (do not disturb) evaluation

use crate::contract::{NotificationCategory, NotificationChannel, NotificationSettings};
use chrono::NaiveTime;

/// A daily `[start, end)` window
///
/// `start > end` wraps past midnight; `start == end` covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuietHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl QuietHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether `t` falls inside the window
    pub fn contains(&self, t: NaiveTime) -> bool {
        if self.start < self.end {
            self.start <= t && t < self.end
        } else if self.start > self.end {
            t >= self.start || t < self.end
        } else {
            true
        }
    }
}

/// Whether notifications are suppressed at `t`
pub fn is_active(do_not_disturb: bool, window: QuietHours, t: NaiveTime) -> bool {
    do_not_disturb && window.contains(t)
}

impl NotificationSettings {
    pub fn quiet_hours(&self) -> QuietHours {
        QuietHours::new(self.quiet_hours_start, self.quiet_hours_end)
    }

    /// Whether do-not-disturb is in effect at time of day `t`
    pub fn quiet_hours_active(&self, t: NaiveTime) -> bool {
        is_active(self.do_not_disturb, self.quiet_hours(), t)
    }

    pub fn channel_enabled(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Push => self.push,
            NotificationChannel::Desktop => self.desktop,
        }
    }

    pub fn category_enabled(&self, category: NotificationCategory) -> bool {
        match category {
            NotificationCategory::Marketing => self.marketing,
            NotificationCategory::Security => self.security,
            NotificationCategory::Friends => self.friends,
            NotificationCategory::Messages => self.messages,
            NotificationCategory::Calls => self.calls,
        }
    }

    /// Delivery gate: channel and category enabled, and outside quiet hours
    pub fn should_notify(
        &self,
        channel: NotificationChannel,
        category: NotificationCategory,
        t: NaiveTime,
    ) -> bool {
        self.channel_enabled(channel) && self.category_enabled(category) && !self.quiet_hours_active(t)
    }

    /// Whether a notification sound may play at `t`
    pub fn should_play_sound(&self, t: NaiveTime) -> bool {
        self.sound && self.sound_volume > 0 && !self.quiet_hours_active(t)
    }
}
