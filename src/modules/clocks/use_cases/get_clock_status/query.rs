#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetClockStatus {
    pub clock_id: String,
}
