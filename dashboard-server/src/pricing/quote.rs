//! Upstream quotes.

use tracing::warn;

use crate::sources::SourceError;

/// A single upstream numeric reading, or the fact that none arrived.
///
/// Quotes live for one fetch-and-derive cycle and are never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    value: Option<f64>,
}

impl Quote {
    /// A successful reading.
    pub fn available(value: f64) -> Self {
        Self { value: Some(value) }
    }

    /// A failed fetch.
    pub fn unavailable() -> Self {
        Self { value: None }
    }

    /// Turn a fetch result into a quote, logging the failure if there was one.
    ///
    /// This is the boundary where upstream errors stop: derivations only
    /// ever see a quote, never an error.
    pub fn from_fetch(source: &'static str, result: Result<f64, SourceError>) -> Self {
        match result {
            Ok(value) => Self::available(value),
            Err(e) => {
                warn!(source, error = %e, "upstream fetch failed");
                Self::unavailable()
            }
        }
    }

    /// The reading, if the fetch succeeded.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Whether the fetch succeeded.
    pub fn is_success(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_quote() {
        let q = Quote::available(31.4);
        assert!(q.is_success());
        assert_eq!(q.value(), Some(31.4));
    }

    #[test]
    fn unavailable_quote() {
        let q = Quote::unavailable();
        assert!(!q.is_success());
        assert_eq!(q.value(), None);
    }

    #[test]
    fn from_fetch_absorbs_errors() {
        let q = Quote::from_fetch("gold", Err(SourceError::EmptyResponse));
        assert_eq!(q, Quote::unavailable());

        let q = Quote::from_fetch("gold", Ok(4330.0));
        assert_eq!(q, Quote::available(4330.0));
    }
}
