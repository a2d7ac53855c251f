// Composition root for the clocks bounded context.
//
// - Read config from environment.
// - Instantiate the in-memory store and the time source.
// - Wire them into the use case handlers.

pub mod config;
pub mod state;
pub mod telemetry;
