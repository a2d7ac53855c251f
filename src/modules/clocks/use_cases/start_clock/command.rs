#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartClock {
    pub clock_id: String,
}
