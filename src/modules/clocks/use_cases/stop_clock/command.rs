#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopClock {
    pub clock_id: String,
}
