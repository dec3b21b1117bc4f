//! Urgency thresholds for departure countdowns.

/// Band thresholds, in whole minutes remaining.
///
/// Each threshold is the inclusive lower edge of its band: with the
/// defaults, 30 minutes is `Calm` and 29 is `Notice`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgencyConfig {
    /// Minutes at or above which a departure is `Calm`.
    pub calm_mins: u32,

    /// Minutes at or above which a departure is `Notice`.
    pub notice_mins: u32,

    /// Minutes at or above which a departure is `Warn`.
    pub warn_mins: u32,

    /// Minutes at or above which a departure is `Urgent`.
    /// Anything below is `Critical`.
    pub urgent_mins: u32,

    /// Below this many minutes the countdown should draw attention
    /// (the watch face pulses it).
    pub attention_below_mins: u32,
}

impl UrgencyConfig {
    /// Create a new configuration with the given thresholds.
    pub fn new(
        calm_mins: u32,
        notice_mins: u32,
        warn_mins: u32,
        urgent_mins: u32,
        attention_below_mins: u32,
    ) -> Self {
        Self {
            calm_mins,
            notice_mins,
            warn_mins,
            urgent_mins,
            attention_below_mins,
        }
    }

    /// Whether a countdown of `minutes` should draw attention.
    pub fn is_critical(&self, minutes: u32) -> bool {
        minutes < self.attention_below_mins
    }
}

impl Default for UrgencyConfig {
    fn default() -> Self {
        Self {
            calm_mins: 30,
            notice_mins: 20,
            warn_mins: 10,
            urgent_mins: 5,
            attention_below_mins: 2,
        }
    }
}
