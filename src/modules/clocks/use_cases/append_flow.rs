// Read-validate-append sequence shared by the command handlers.
//
// The clock is loaded together with its version and the append is conditional on that
// version, so a writer that raced past us makes this append fail with VersionMismatch
// instead of recording a transition that was validated against stale state.

use crate::modules::clocks::core::clock::Clock;
use crate::modules::clocks::core::errors::ClockError;
use crate::modules::clocks::core::events::ClockEvent;
use crate::modules::clocks::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::clock_store::ClockStore;
use tracing::{debug, warn};

pub async fn decide_and_append<TStore, TDecide>(
    store: &TStore,
    clock_id: &str,
    decide: TDecide,
) -> Result<Vec<ClockEvent>, ApplicationError>
where
    TStore: ClockStore + ?Sized,
    TDecide: FnOnce(&Clock) -> Result<Vec<ClockEvent>, ClockError>,
{
    let loaded = store.load(clock_id).await?;
    let events = decide(&loaded.clock).inspect_err(|error| {
        warn!(clock_id, %error, "clock rejected the command");
    })?;
    store.append(clock_id, loaded.version, &events).await?;
    debug!(
        clock_id,
        version = loaded.version + events.len() as i64,
        "events appended"
    );
    Ok(events)
}
