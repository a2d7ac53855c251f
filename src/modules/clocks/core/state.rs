use crate::modules::clocks::core::events::ClockEventType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockState {
    Running,
    Stopped,
}

impl ClockState {
    /// Run state implied by a state-changing event type. ADD and SUB imply none.
    pub fn after(event_type: ClockEventType) -> Option<Self> {
        match event_type {
            ClockEventType::Start => Some(ClockState::Running),
            ClockEventType::Stop => Some(ClockState::Stopped),
            ClockEventType::Add | ClockEventType::Sub => None,
        }
    }

    pub fn is_running(self) -> bool {
        self == ClockState::Running
    }
}
