//! Alarm state.

/// Whether the siren is sounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlarmState {
    /// Green LED on, buzzer silent. Boot state.
    #[default]
    Idle,
    /// Red LED on, tone sweeping.
    Active,
}

impl AlarmState {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}
