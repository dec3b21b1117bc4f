//! Timetable lookup errors.

/// Errors from timetable lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// The requested destination is not in the timetable.
    #[error("unknown destination: {0}")]
    UnknownDestination(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TimetableError::UnknownDestination("Atlantis".into());
        assert_eq!(err.to_string(), "unknown destination: Atlantis");
    }
}
