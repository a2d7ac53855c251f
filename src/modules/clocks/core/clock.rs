use chrono::{DateTime, TimeDelta, Utc};

use crate::modules::clocks::core::errors::ClockError;
use crate::modules::clocks::core::events::{
    ClockEvent, ClockEventDetail, ClockEventType, PendingClockEvent,
};
use crate::modules::clocks::core::evolve::{ClockProjection, StateChange, project};
use crate::modules::clocks::core::state::ClockState;

/// A countdown clock whose every derived value comes from its append-only event log.
///
/// Nothing besides the log and the two settings is stored; `state`, `remaining_time`
/// and `end_time` fold the log on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    pub id: String,
    pub name: String,
    pub increment: TimeDelta,
    pub initial_time: TimeDelta,
    events: Vec<ClockEvent>,
}

impl Clock {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        initial_time: TimeDelta,
        increment: TimeDelta,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            increment,
            initial_time,
            events: Vec::new(),
        }
    }

    /// Rebuilds a clock from a recorded log, replaying each event through [`Clock::append`].
    pub fn with_events(
        id: impl Into<String>,
        name: impl Into<String>,
        initial_time: TimeDelta,
        increment: TimeDelta,
        events: impl IntoIterator<Item = ClockEvent>,
    ) -> Result<Self, ClockError> {
        let mut clock = Self::new(id, name, initial_time, increment);
        for event in events {
            clock.append(event)?;
        }
        Ok(clock)
    }

    pub fn events(&self) -> &[ClockEvent] {
        &self.events
    }

    pub fn projection(&self) -> ClockProjection {
        project(&self.events)
    }

    pub fn state(&self) -> Result<ClockState, ClockError> {
        self.projection()
            .last_state_change
            .map(|change| change.state)
            .ok_or(ClockError::NoStateChangeRecorded)
    }

    /// Snapshot carried by the most recent event. Does not account for time elapsed since.
    pub fn remaining_time(&self) -> Result<TimeDelta, ClockError> {
        self.projection()
            .latest_remaining_time
            .ok_or(ClockError::EmptyEventLog)
    }

    /// Snapshot carried by the event at `position` in the log.
    pub fn remaining_time_as_of(&self, position: usize) -> Result<TimeDelta, ClockError> {
        if self.events.is_empty() {
            return Err(ClockError::EmptyEventLog);
        }
        self.events
            .get(position)
            .map(|event| event.remaining_time)
            .ok_or(ClockError::EventNotFound {
                position,
                len: self.events.len(),
            })
    }

    /// Projected moment the clock reaches zero if it runs uninterrupted from its last
    /// state change. Also computed while stopped; check [`Clock::state`] before relying on it.
    pub fn end_time(&self) -> Result<DateTime<Utc>, ClockError> {
        let projection = self.projection();
        let remaining = projection
            .latest_remaining_time
            .ok_or(ClockError::EmptyEventLog)?;
        let change = projection
            .last_state_change
            .ok_or(ClockError::NoStateChangeRecorded)?;
        change
            .timestamp
            .checked_add_signed(remaining)
            .ok_or(ClockError::TimeOverflow)
    }

    /// Remaining time as of `now`, counting down while the clock is running.
    pub fn live_remaining_time(&self, now: DateTime<Utc>) -> Result<TimeDelta, ClockError> {
        let projection = self.projection();
        let Some(remaining) = projection.latest_remaining_time else {
            return Ok(self.initial_time);
        };
        match projection.last_state_change {
            Some(StateChange {
                state: ClockState::Running,
                timestamp,
            }) => checked_sub(remaining, now - timestamp),
            _ => Ok(remaining),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state().is_ok_and(ClockState::is_running)
    }

    /// Validates a START at `now`. A clock that was never started counts as stopped.
    pub fn start_event(&self, now: DateTime<Utc>) -> Result<PendingClockEvent, ClockError> {
        if self.is_running() {
            return Err(ClockError::ClockIsAlreadyActive);
        }
        self.ensure_in_order(now)?;
        Ok(PendingClockEvent::start(now))
    }

    pub fn stop_event(&self, now: DateTime<Utc>) -> Result<PendingClockEvent, ClockError> {
        if !self.is_running() {
            return Err(ClockError::ClockIsNotActive);
        }
        self.ensure_in_order(now)?;
        Ok(PendingClockEvent::stop(now))
    }

    /// Builds an ADD event. Allowed whether the clock runs or not.
    pub fn add_event(
        &self,
        now: DateTime<Utc>,
        amount: TimeDelta,
    ) -> Result<ClockEvent, ClockError> {
        let detail = ClockEventDetail::Add { amount };
        self.ensure_in_order(now)?;
        let remaining = self.adjusted_snapshot(detail)?;
        Ok(ClockEvent::new(detail, now, remaining))
    }

    /// Builds a SUB event. Allowed whether the clock runs or not.
    pub fn sub_event(
        &self,
        now: DateTime<Utc>,
        amount: TimeDelta,
    ) -> Result<ClockEvent, ClockError> {
        let detail = ClockEventDetail::Sub { amount };
        self.ensure_in_order(now)?;
        let remaining = self.adjusted_snapshot(detail)?;
        Ok(ClockEvent::new(detail, now, remaining))
    }

    /// Appends `event`, re-checking the transition against the current log first.
    ///
    /// ADD and SUB must carry the previous snapshot moved by their amount.
    pub fn append(&mut self, event: ClockEvent) -> Result<(), ClockError> {
        self.ensure_in_order(event.timestamp)?;
        match event.detail {
            ClockEventDetail::Start if self.is_running() => {
                return Err(ClockError::ClockIsAlreadyActive);
            }
            ClockEventDetail::Stop if !self.is_running() => {
                return Err(ClockError::ClockIsNotActive);
            }
            ClockEventDetail::Add { .. } | ClockEventDetail::Sub { .. } => {
                let expected = self.adjusted_snapshot(event.detail)?;
                if event.remaining_time != expected {
                    return Err(ClockError::SnapshotMismatch {
                        expected,
                        actual: event.remaining_time,
                    });
                }
            }
            _ => {}
        }
        self.events.push(event);
        Ok(())
    }

    pub fn count_of(&self, event_type: ClockEventType) -> usize {
        self.events
            .iter()
            .filter(|event| event.event_type() == event_type)
            .count()
    }

    fn latest_snapshot(&self) -> TimeDelta {
        self.remaining_time().unwrap_or(self.initial_time)
    }

    // Snapshot an ADD or SUB with `detail` has to carry on top of the current log.
    fn adjusted_snapshot(&self, detail: ClockEventDetail) -> Result<TimeDelta, ClockError> {
        let previous = self.latest_snapshot();
        match detail {
            ClockEventDetail::Add { amount } => {
                ensure_non_negative(amount)?;
                previous.checked_add(&amount).ok_or(ClockError::TimeOverflow)
            }
            ClockEventDetail::Sub { amount } => {
                ensure_non_negative(amount)?;
                checked_sub(previous, amount)
            }
            ClockEventDetail::Start | ClockEventDetail::Stop => Ok(previous),
        }
    }

    fn ensure_in_order(&self, timestamp: DateTime<Utc>) -> Result<(), ClockError> {
        match self.events.last() {
            Some(latest) if timestamp < latest.timestamp => Err(ClockError::OutOfOrder {
                timestamp,
                latest: latest.timestamp,
            }),
            _ => Ok(()),
        }
    }
}

fn checked_sub(lhs: TimeDelta, rhs: TimeDelta) -> Result<TimeDelta, ClockError> {
    lhs.checked_sub(&rhs).ok_or(ClockError::TimeOverflow)
}

fn ensure_non_negative(amount: TimeDelta) -> Result<(), ClockError> {
    if amount < TimeDelta::zero() {
        return Err(ClockError::NegativeAdjustment(amount));
    }
    Ok(())
}
