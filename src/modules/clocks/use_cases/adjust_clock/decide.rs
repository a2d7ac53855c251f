use crate::modules::clocks::core::clock::Clock;
use crate::modules::clocks::core::errors::ClockError;
use crate::modules::clocks::core::events::ClockEvent;
use crate::modules::clocks::use_cases::adjust_clock::command::Adjustment;
use chrono::{DateTime, Utc};

pub fn decide_adjust(
    clock: &Clock,
    adjustment: Adjustment,
    now: DateTime<Utc>,
) -> Result<Vec<ClockEvent>, ClockError> {
    let event = match adjustment {
        Adjustment::Add(amount) => clock.add_event(now, amount)?,
        Adjustment::Sub(amount) => clock.sub_event(now, amount)?,
    };
    Ok(vec![event])
}

#[cfg(test)]
mod adjust_clock_decide_tests {
    use super::*;
    use crate::modules::clocks::core::events::ClockEventDetail;
    use crate::tests::fixtures::clocks::{fresh_clock, running_clock};
    use crate::tests::fixtures::time::{minutes_after_t0, t0};
    use chrono::TimeDelta;
    use rstest::rstest;

    #[rstest]
    fn it_should_add_time_to_a_running_clock(running_clock: Clock) {
        let events = decide_adjust(
            &running_clock,
            Adjustment::Add(TimeDelta::seconds(10)),
            minutes_after_t0(1),
        )
        .unwrap();
        assert_eq!(
            events[0].detail,
            ClockEventDetail::Add {
                amount: TimeDelta::seconds(10)
            }
        );
        assert_eq!(events[0].remaining_time, TimeDelta::seconds(310));
    }

    #[rstest]
    fn it_should_subtract_time_from_a_clock_that_never_ran(fresh_clock: Clock) {
        let events =
            decide_adjust(&fresh_clock, Adjustment::Sub(TimeDelta::minutes(1)), t0()).unwrap();
        assert_eq!(events[0].remaining_time, TimeDelta::minutes(4));
    }

    #[rstest]
    fn it_should_reject_a_negative_amount(running_clock: Clock) {
        let amount = TimeDelta::seconds(-1);
        assert_eq!(
            decide_adjust(&running_clock, Adjustment::Add(amount), minutes_after_t0(1)),
            Err(ClockError::NegativeAdjustment(amount))
        );
    }
}
