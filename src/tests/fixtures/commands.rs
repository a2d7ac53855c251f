// Shared test fixture for the CreateClock command.

use crate::modules::clocks::use_cases::create_clock::command::CreateClock;
use chrono::TimeDelta;

pub struct CreateClockBuilder {
    inner: CreateClock,
}

impl Default for CreateClockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateClockBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateClock {
                name: "White".to_string(),
                initial_time: Some(TimeDelta::minutes(5)),
                increment: Some(TimeDelta::seconds(2)),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn initial_time(mut self, v: Option<TimeDelta>) -> Self {
        self.inner.initial_time = v;
        self
    }

    pub fn increment(mut self, v: Option<TimeDelta>) -> Self {
        self.inner.increment = v;
        self
    }

    pub fn build(self) -> CreateClock {
        self.inner
    }
}
