//! Record ID generation.
//!
//! IDs are the decimal milliseconds of the creation instant. Two records created
//! within the same millisecond would collide, so callers that hold the store
//! lock use [`next_unique_id`] to step forward until the ID is free.

use chrono::{DateTime, Utc};

/// First timestamp ID at or after `now` for which `taken` returns false.
pub fn next_unique_id(now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let id = millis.to_string();
        if !taken(&id) {
            return id;
        }
        millis += 1;
    }
}
