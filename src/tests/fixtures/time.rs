// Fixed instants for tests. All scenarios are anchored at t0.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn minutes_after_t0(minutes: i64) -> DateTime<Utc> {
    t0() + TimeDelta::minutes(minutes)
}
