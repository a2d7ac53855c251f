use chrono::TimeDelta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClock {
    pub name: String,
    pub initial_time: Option<TimeDelta>,
    pub increment: Option<TimeDelta>,
}

/// Settings used when a CreateClock command leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockDefaults {
    pub initial_time: TimeDelta,
    pub increment: TimeDelta,
}

impl Default for ClockDefaults {
    fn default() -> Self {
        Self {
            initial_time: TimeDelta::minutes(5),
            increment: TimeDelta::zero(),
        }
    }
}
