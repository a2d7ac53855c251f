// Shared builders for clock events with explicit snapshots.

use crate::modules::clocks::core::events::{ClockEvent, ClockEventDetail};
use chrono::{DateTime, TimeDelta, Utc};

pub fn start_at(timestamp: DateTime<Utc>, remaining_time: TimeDelta) -> ClockEvent {
    ClockEvent::new(ClockEventDetail::Start, timestamp, remaining_time)
}

pub fn stop_at(timestamp: DateTime<Utc>, remaining_time: TimeDelta) -> ClockEvent {
    ClockEvent::new(ClockEventDetail::Stop, timestamp, remaining_time)
}

pub fn add_at(
    timestamp: DateTime<Utc>,
    amount: TimeDelta,
    remaining_time: TimeDelta,
) -> ClockEvent {
    ClockEvent::new(ClockEventDetail::Add { amount }, timestamp, remaining_time)
}

pub fn sub_at(
    timestamp: DateTime<Utc>,
    amount: TimeDelta,
    remaining_time: TimeDelta,
) -> ClockEvent {
    ClockEvent::new(ClockEventDetail::Sub { amount }, timestamp, remaining_time)
}
