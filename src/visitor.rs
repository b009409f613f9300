//! Visitor counter persisted as JSON in localStorage.
//!
//! Storage is best-effort throughout: a missing or corrupt record reads as
//! zero, and a failed write only costs persistence, never the in-memory
//! count for the current session. Nothing here returns an error.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::config::VISITOR_STORAGE_KEY;

/// Wire format of the persisted record. Field names match the storage
/// layout the site has always written, so `lastVisit` stays camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub count: u64,
    #[serde(rename = "lastVisit")]
    pub last_visit: String,
    pub timestamp: i64,
}

impl VisitorRecord {
    fn now(count: u64) -> Self {
        let now = Utc::now();
        Self {
            count,
            last_visit: now.to_rfc3339(),
            timestamp: now.timestamp_millis(),
        }
    }
}

/// Count held in a stored payload; absent or unparseable payloads count as
/// zero.
pub fn count_from_stored(raw: Option<&str>) -> u64 {
    raw.and_then(|json| serde_json::from_str::<VisitorRecord>(json).ok())
        .map(|record| record.count)
        .unwrap_or(0)
}

/// Reads the persisted count once at startup.
pub fn load() -> u64 {
    let raw = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(VISITOR_STORAGE_KEY).ok())
        .flatten();
    if raw.is_none() {
        gloo_console::log!("No previous visitor data found");
    }
    count_from_stored(raw.as_deref())
}

/// Bumps `current` by one and persists the new record immediately. The
/// returned value is authoritative for this session even when the write
/// fails.
pub fn increment(current: u64) -> u64 {
    let count = current + 1;
    persist(&VisitorRecord::now(count));
    count
}

fn persist(record: &VisitorRecord) {
    let serialized = match serde_json::to_string(record) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("could not serialize visitor record: {err}");
            return;
        }
    };
    let written = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .map(|storage| storage.set_item(VISITOR_STORAGE_KEY, &serialized));
    if !matches!(written, Some(Ok(()))) {
        gloo_console::error!("Failed to save visitor data");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(count: u64) -> VisitorRecord {
        VisitorRecord {
            count,
            last_visit: "2025-01-01T00:00:00+00:00".to_string(),
            timestamp: 1_735_689_600_000,
        }
    }

    #[test]
    fn absent_payload_counts_as_zero() {
        assert_eq!(count_from_stored(None), 0);
    }

    #[test]
    fn corrupt_payload_counts_as_zero() {
        assert_eq!(count_from_stored(Some("not json")), 0);
        assert_eq!(count_from_stored(Some("{\"count\":\"twelve\"}")), 0);
        assert_eq!(count_from_stored(Some("{}")), 0);
    }

    #[test]
    fn valid_payload_round_trips_the_count() {
        let json = serde_json::to_string(&record(41)).unwrap();
        assert_eq!(count_from_stored(Some(&json)), 41);
    }

    #[test]
    fn wire_field_names_are_stable() {
        let json = serde_json::to_string(&record(7)).unwrap();
        assert!(json.contains("\"count\":7"));
        assert!(json.contains("\"lastVisit\":"));
        assert!(json.contains("\"timestamp\":"));
        assert!(!json.contains("last_visit"));
    }

    #[test]
    fn legacy_payload_with_extra_fields_still_parses() {
        let json = "{\"count\":3,\"lastVisit\":\"2024-06-01T12:00:00Z\",\
                    \"timestamp\":1717243200000,\"theme\":\"dark\"}";
        assert_eq!(count_from_stored(Some(json)), 3);
    }

    #[test]
    fn increment_is_previous_plus_one_in_serialized_form() {
        // The persisted payload for a fresh visit must parse back to one
        // more than what was read; this pins both directions of the wire.
        let previous = count_from_stored(Some(&serde_json::to_string(&record(5)).unwrap()));
        let next = serde_json::to_string(&record(previous + 1)).unwrap();
        assert_eq!(count_from_stored(Some(&next)), 6);
    }
}
