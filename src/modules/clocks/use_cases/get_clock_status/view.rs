// Read model for a single clock as seen at a given instant.

use crate::modules::clocks::core::clock::Clock;
use crate::modules::clocks::core::errors::ClockError;
use crate::modules::clocks::core::state::ClockState;
use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockStatus {
    pub clock_id: String,
    pub name: String,
    // None until the clock was started for the first time.
    pub state: Option<ClockState>,
    pub remaining_time: TimeDelta,
    // Only projected while running.
    pub end_time: Option<DateTime<Utc>>,
    pub expired: bool,
    pub event_count: usize,
}

pub fn clock_status(clock: &Clock, now: DateTime<Utc>) -> Result<ClockStatus, ClockError> {
    let state = clock.state().ok();
    let remaining_time = clock.live_remaining_time(now)?;
    let end_time = match state {
        Some(ClockState::Running) => clock.end_time().ok(),
        _ => None,
    };
    Ok(ClockStatus {
        clock_id: clock.id.clone(),
        name: clock.name.clone(),
        state,
        remaining_time,
        end_time,
        expired: remaining_time <= TimeDelta::zero(),
        event_count: clock.projection().event_count,
    })
}
