//! Countdown text for the watch face.

/// Shown when a destination has no resolvable next departure.
pub const COUNTDOWN_PLACEHOLDER: &str = "--:--:--";

/// Render a number of seconds as `HH:MM:SS`, or `MM:SS` under an hour.
///
/// ```
/// use dashboard_server::scheduler::format_countdown;
///
/// assert_eq!(format_countdown(65), "01:05");
/// assert_eq!(format_countdown(3 * 3600 + 2 * 60 + 1), "03:02:01");
/// ```
pub fn format_countdown(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
