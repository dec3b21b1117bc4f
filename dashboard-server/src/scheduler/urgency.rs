//! Urgency tiers for departure countdowns.

use std::fmt;

use serde::Serialize;

use super::config::UrgencyConfig;

/// How soon the next departure is, as a discrete band.
///
/// Variants are ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    /// Plenty of time.
    Calm,
    /// Worth keeping an eye on.
    Notice,
    /// Time to get ready.
    Warn,
    /// Leave now.
    Urgent,
    /// Probably missing it.
    Critical,
}

impl UrgencyTier {
    /// Classify a whole number of minutes remaining.
    ///
    /// ```
    /// use dashboard_server::scheduler::{UrgencyConfig, UrgencyTier};
    ///
    /// let config = UrgencyConfig::default();
    /// assert_eq!(UrgencyTier::classify(30, &config), UrgencyTier::Calm);
    /// assert_eq!(UrgencyTier::classify(29, &config), UrgencyTier::Notice);
    /// assert_eq!(UrgencyTier::classify(4, &config), UrgencyTier::Critical);
    /// ```
    pub fn classify(minutes: u32, config: &UrgencyConfig) -> Self {
        if minutes >= config.calm_mins {
            UrgencyTier::Calm
        } else if minutes >= config.notice_mins {
            UrgencyTier::Notice
        } else if minutes >= config.warn_mins {
            UrgencyTier::Warn
        } else if minutes >= config.urgent_mins {
            UrgencyTier::Urgent
        } else {
            UrgencyTier::Critical
        }
    }

    /// Lowercase name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyTier::Calm => "calm",
            UrgencyTier::Notice => "notice",
            UrgencyTier::Warn => "warn",
            UrgencyTier::Urgent => "urgent",
            UrgencyTier::Critical => "critical",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(minutes: u32) -> UrgencyTier {
        UrgencyTier::classify(minutes, &UrgencyConfig::default())
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(30), UrgencyTier::Calm);
        assert_eq!(classify(29), UrgencyTier::Notice);
        assert_eq!(classify(20), UrgencyTier::Notice);
        assert_eq!(classify(19), UrgencyTier::Warn);
        assert_eq!(classify(10), UrgencyTier::Warn);
        assert_eq!(classify(9), UrgencyTier::Urgent);
        assert_eq!(classify(5), UrgencyTier::Urgent);
        assert_eq!(classify(4), UrgencyTier::Critical);
        assert_eq!(classify(1), UrgencyTier::Critical);
        assert_eq!(classify(0), UrgencyTier::Critical);
    }

    #[test]
    fn far_future_is_calm() {
        assert_eq!(classify(23 * 60 + 59), UrgencyTier::Calm);
    }

    #[test]
    fn custom_thresholds() {
        let config = UrgencyConfig::new(60, 40, 20, 10, 5);
        assert_eq!(UrgencyTier::classify(45, &config), UrgencyTier::Notice);
        assert_eq!(UrgencyTier::classify(9, &config), UrgencyTier::Critical);
    }

    #[test]
    fn tiers_are_ordered_by_urgency() {
        assert!(UrgencyTier::Calm < UrgencyTier::Notice);
        assert!(UrgencyTier::Notice < UrgencyTier::Warn);
        assert!(UrgencyTier::Warn < UrgencyTier::Urgent);
        assert!(UrgencyTier::Urgent < UrgencyTier::Critical);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UrgencyTier::Notice).unwrap(),
            "\"notice\""
        );
        assert_eq!(UrgencyTier::Critical.to_string(), "critical");
    }
}
