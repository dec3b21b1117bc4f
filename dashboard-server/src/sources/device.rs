//! On-device readings passed straight through to the dashboard.

/// Step counter and battery gauge.
pub trait DeviceSource: Send + Sync {
    /// Steps since the counter was last reset, if a counter is present.
    fn steps(&self) -> Option<u64>;

    /// Battery charge in percent, if known.
    fn battery_percent(&self) -> Option<u8>;
}

/// Fixed readings, for hosts without sensors.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDevice {
    steps: Option<u64>,
    battery_percent: Option<u8>,
}

impl StaticDevice {
    /// Create a device reporting the given readings. Battery is capped at 100.
    pub fn new(steps: Option<u64>, battery_percent: Option<u8>) -> Self {
        Self {
            steps,
            battery_percent: battery_percent.map(|b| b.min(100)),
        }
    }
}

impl DeviceSource for StaticDevice {
    fn steps(&self) -> Option<u64> {
        self.steps
    }

    fn battery_percent(&self) -> Option<u8> {
        self.battery_percent
    }
}
