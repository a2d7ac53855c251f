use crate::modules::clocks::core::clock::Clock;
use crate::modules::clocks::core::errors::ClockError;
use crate::modules::clocks::core::events::ClockEvent;
use chrono::{DateTime, TimeDelta, Utc};

/// A STOP carries the time left at `now`, plus the clock's increment unless the clock
/// already ran out.
pub fn decide_stop(clock: &Clock, now: DateTime<Utc>) -> Result<Vec<ClockEvent>, ClockError> {
    let pending = clock.stop_event(now)?;
    let remaining = clock.live_remaining_time(now)?;
    let remaining = if remaining > TimeDelta::zero() {
        remaining
            .checked_add(&clock.increment)
            .ok_or(ClockError::TimeOverflow)?
    } else {
        remaining
    };
    Ok(vec![pending.with_remaining_time(remaining)])
}
