use chrono::{DateTime, TimeDelta, Utc};

/// Closed set of transitions a clock can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockEventType {
    Start,
    Stop,
    Add,
    Sub,
}

impl ClockEventType {
    /// START and STOP are the only events that change the run state.
    pub fn is_state_change(self) -> bool {
        matches!(self, ClockEventType::Start | ClockEventType::Stop)
    }
}

/// Payload keyed by the event type. Adjustments carry the amount they moved the clock by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEventDetail {
    Start,
    Stop,
    Add { amount: TimeDelta },
    Sub { amount: TimeDelta },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockEvent {
    pub detail: ClockEventDetail,
    pub timestamp: DateTime<Utc>,
    // Time left on the clock when the event was emitted. Negative once the clock overran.
    pub remaining_time: TimeDelta,
}

impl ClockEvent {
    pub fn new(
        detail: ClockEventDetail,
        timestamp: DateTime<Utc>,
        remaining_time: TimeDelta,
    ) -> Self {
        Self {
            detail,
            timestamp,
            remaining_time,
        }
    }

    pub fn event_type(&self) -> ClockEventType {
        match self.detail {
            ClockEventDetail::Start => ClockEventType::Start,
            ClockEventDetail::Stop => ClockEventType::Stop,
            ClockEventDetail::Add { .. } => ClockEventType::Add,
            ClockEventDetail::Sub { .. } => ClockEventType::Sub,
        }
    }

    pub fn is_state_change(&self) -> bool {
        self.event_type().is_state_change()
    }
}

/// A START or STOP candidate that has passed validation but has no snapshot yet.
///
/// The owner of the append step computes the remaining time and completes the
/// event with [`PendingClockEvent::with_remaining_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClockEvent {
    detail: ClockEventDetail,
    timestamp: DateTime<Utc>,
}

impl PendingClockEvent {
    pub(crate) fn start(timestamp: DateTime<Utc>) -> Self {
        Self {
            detail: ClockEventDetail::Start,
            timestamp,
        }
    }

    pub(crate) fn stop(timestamp: DateTime<Utc>) -> Self {
        Self {
            detail: ClockEventDetail::Stop,
            timestamp,
        }
    }

    pub fn event_type(&self) -> ClockEventType {
        match self.detail {
            ClockEventDetail::Start => ClockEventType::Start,
            _ => ClockEventType::Stop,
        }
    }

    pub fn with_remaining_time(self, remaining_time: TimeDelta) -> ClockEvent {
        ClockEvent::new(self.detail, self.timestamp, remaining_time)
    }
}
