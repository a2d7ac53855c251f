use crate::modules::clocks::core::errors::ClockError;
use crate::shared::infrastructure::clock_store::ClockStoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] ClockStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] ClockError),
}
