// Canonical clocks for tests: five minutes on the clock, two seconds increment.

use crate::modules::clocks::core::clock::Clock;
use crate::tests::fixtures::events::start_at;
use crate::tests::fixtures::time::t0;
use chrono::TimeDelta;
use rstest::fixture;

pub const CLOCK_ID: &str = "clock-fixed-0001";

#[fixture]
pub fn fresh_clock() -> Clock {
    Clock::new(CLOCK_ID, "White", TimeDelta::minutes(5), TimeDelta::seconds(2))
}

/// Started at t0 with the full five minutes.
#[fixture]
pub fn running_clock() -> Clock {
    Clock::with_events(
        CLOCK_ID,
        "White",
        TimeDelta::minutes(5),
        TimeDelta::seconds(2),
        [start_at(t0(), TimeDelta::minutes(5))],
    )
    .unwrap()
}
