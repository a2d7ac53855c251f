use crate::modules::clocks::core::clock::Clock;
use crate::modules::clocks::core::errors::ClockError;
use crate::modules::clocks::use_cases::create_clock::command::{ClockDefaults, CreateClock};
use chrono::TimeDelta;

pub fn decide_create(
    clock_id: String,
    command: CreateClock,
    defaults: &ClockDefaults,
) -> Result<Clock, ClockError> {
    let initial_time = command.initial_time.unwrap_or(defaults.initial_time);
    let increment = command.increment.unwrap_or(defaults.increment);
    if initial_time <= TimeDelta::zero() {
        return Err(ClockError::InvalidSettings(format!(
            "initial time must be positive, got {initial_time}"
        )));
    }
    if increment < TimeDelta::zero() {
        return Err(ClockError::InvalidSettings(format!(
            "increment must not be negative, got {increment}"
        )));
    }
    Ok(Clock::new(clock_id, command.name, initial_time, increment))
}
