//! Common test utilities: manual clock, recording sink and snapshot fixtures

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use user_preferences::domain::Clock;
use user_preferences::{ChangeSink, PreferencesChange, PreferencesSnapshot};

/// Clock that only moves when told to and counts how often it is read
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
    reads: AtomicUsize,
}

impl ManualClock {
    pub fn new(at: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(at),
            reads: AtomicUsize::new(0),
        })
    }

    /// 2024-03-05 15:07:00 UTC
    pub fn fixed() -> Arc<Self> {
        Self::new(Utc.with_ymd_and_hms(2024, 3, 5, 15, 7, 0).unwrap())
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock() = at;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        *self.now.lock()
    }
}

/// Sink that keeps every published change
#[derive(Default)]
pub struct RecordingSink {
    changes: Mutex<Vec<PreferencesChange>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn changes(&self) -> Vec<PreferencesChange> {
        self.changes.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.changes.lock().len()
    }

    pub fn last(&self) -> Option<PreferencesChange> {
        self.changes.lock().last().cloned()
    }
}

impl ChangeSink for RecordingSink {
    fn publish(&self, change: &PreferencesChange) -> anyhow::Result<()> {
        self.changes.lock().push(change.clone());
        Ok(())
    }
}

/// Profile record as a host would hand it over
pub fn profile_snapshot() -> PreferencesSnapshot {
    PreferencesSnapshot::from(json!({
        "displayName": "Ada Lovelace",
        "avatarUrl": "https://example.com/ada.png",
        "preferences": {
            "theme": "dark",
            "language": "fr",
            "timezone": "UTC+01:00",
            "dateFormat": "DD/MM/YYYY",
            "timeFormat": "24h",
            "country": "France",
            "currency": "EUR",
            "notifications": {
                "email": true,
                "push": false,
                "marketing": true,
                "doNotDisturb": true,
                "quietHoursStart": "23:00",
                "quietHoursEnd": "07:00",
                "soundVolume": 30
            }
        }
    }))
}

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}
