use chrono::TimeDelta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Add(TimeDelta),
    Sub(TimeDelta),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustClock {
    pub clock_id: String,
    pub adjustment: Adjustment,
}
