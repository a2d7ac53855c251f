use chrono::{DateTime, TimeDelta, Utc};

use crate::modules::clocks::core::events::ClockEvent;
use crate::modules::clocks::core::state::ClockState;

/// Values derived from a clock's event log. Built by folding every event through [`evolve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockProjection {
    pub event_count: usize,
    pub last_state_change: Option<StateChange>,
    pub latest_remaining_time: Option<TimeDelta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub state: ClockState,
    pub timestamp: DateTime<Utc>,
}

pub fn evolve(projection: ClockProjection, event: &ClockEvent) -> ClockProjection {
    let last_state_change = match ClockState::after(event.event_type()) {
        Some(state) => Some(StateChange {
            state,
            timestamp: event.timestamp,
        }),
        None => projection.last_state_change,
    };
    ClockProjection {
        event_count: projection.event_count + 1,
        last_state_change,
        latest_remaining_time: Some(event.remaining_time),
    }
}

pub fn project<'a>(events: impl IntoIterator<Item = &'a ClockEvent>) -> ClockProjection {
    events.into_iter().fold(ClockProjection::default(), evolve)
}
