use crate::modules::clocks::core::errors::ClockError;
use crate::modules::clocks::core::events::ClockEventType;
use crate::modules::clocks::core::state::ClockState;
use crate::modules::clocks::use_cases::adjust_clock::command::{AdjustClock, Adjustment};
use crate::modules::clocks::use_cases::errors::ApplicationError;
use crate::modules::clocks::use_cases::get_clock_status::query::GetClockStatus;
use crate::modules::clocks::use_cases::start_clock::command::StartClock;
use crate::modules::clocks::use_cases::stop_clock::command::StopClock;
use crate::shared::infrastructure::clock_store::ClockStore;
use crate::shell::config::ClockConfig;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::CreateClockBuilder;
use crate::tests::fixtures::time::t0;
use crate::tests::fixtures::time_source::ManualTimeSource;
use chrono::TimeDelta;
use std::sync::Arc;

#[tokio::test]
async fn plays_a_clock_through_start_stop_and_adjustments() {
    let time_source = Arc::new(ManualTimeSource::new(t0()));
    let app = AppState::new(ClockConfig::default(), time_source.clone());
    let clock_id = app
        .create_clock
        .handle(CreateClockBuilder::new().build())
        .await
        .unwrap();
    let start = || StartClock {
        clock_id: clock_id.clone(),
    };
    let stop = || StopClock {
        clock_id: clock_id.clone(),
    };
    let status = || GetClockStatus {
        clock_id: clock_id.clone(),
    };

    app.start_clock.handle(start()).await.unwrap();
    assert_eq!(
        app.start_clock.handle(start()).await,
        Err(ApplicationError::Domain(ClockError::ClockIsAlreadyActive))
    );

    time_source.advance(TimeDelta::minutes(2));
    app.stop_clock.handle(stop()).await.unwrap();
    let after_stop = app.clock_status.handle(status()).await.unwrap();
    assert_eq!(after_stop.state, Some(ClockState::Stopped));
    assert_eq!(
        after_stop.remaining_time,
        TimeDelta::minutes(3) + TimeDelta::seconds(2)
    );

    time_source.advance(TimeDelta::minutes(10));
    assert_eq!(
        app.clock_status.handle(status()).await.unwrap().remaining_time,
        after_stop.remaining_time,
        "a stopped clock must not count down"
    );
    app.adjust_clock
        .handle(AdjustClock {
            clock_id: clock_id.clone(),
            adjustment: Adjustment::Sub(TimeDelta::seconds(2)),
        })
        .await
        .unwrap();

    app.start_clock.handle(start()).await.unwrap();
    time_source.advance(TimeDelta::minutes(4));
    let expired = app.clock_status.handle(status()).await.unwrap();
    assert_eq!(expired.state, Some(ClockState::Running));
    assert_eq!(expired.remaining_time, TimeDelta::minutes(-1));
    assert!(expired.expired);

    let loaded = app.store.load(&clock_id).await.unwrap();
    assert_eq!(loaded.version, 4);
    assert_eq!(loaded.clock.count_of(ClockEventType::Start), 2);
    assert_eq!(loaded.clock.count_of(ClockEventType::Stop), 1);
    assert_eq!(loaded.clock.count_of(ClockEventType::Sub), 1);
}

#[tokio::test]
async fn uses_the_configured_defaults_for_new_clocks() {
    let config = ClockConfig {
        defaults: crate::modules::clocks::use_cases::create_clock::command::ClockDefaults {
            initial_time: TimeDelta::minutes(1),
            increment: TimeDelta::seconds(5),
        },
        store_append_delay_ms: 0,
    };
    let app = AppState::new(config, Arc::new(ManualTimeSource::new(t0())));
    let clock_id = app
        .create_clock
        .handle(
            CreateClockBuilder::new()
                .initial_time(None)
                .increment(None)
                .build(),
        )
        .await
        .unwrap();
    let loaded = app.store.load(&clock_id).await.unwrap();
    assert_eq!(loaded.clock.initial_time, TimeDelta::minutes(1));
    assert_eq!(loaded.clock.increment, TimeDelta::seconds(5));
}
