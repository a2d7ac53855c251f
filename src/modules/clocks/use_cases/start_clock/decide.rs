use crate::modules::clocks::core::clock::Clock;
use crate::modules::clocks::core::errors::ClockError;
use crate::modules::clocks::core::events::ClockEvent;
use chrono::{DateTime, Utc};

/// A START carries the time left when the clock was last stopped, or the initial time
/// on a clock that never ran.
pub fn decide_start(clock: &Clock, now: DateTime<Utc>) -> Result<Vec<ClockEvent>, ClockError> {
    let pending = clock.start_event(now)?;
    let remaining = clock.live_remaining_time(now)?;
    Ok(vec![pending.with_remaining_time(remaining)])
}
