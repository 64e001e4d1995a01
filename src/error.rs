use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while checking a case listing.
///
/// Only [`ScraperError::StaleElement`] is transient; the CAPTCHA relay retries it.
/// Every other variant aborts the run.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// No usable browser could be launched
    #[error("browser environment unavailable: {reason}")]
    Environment { reason: String },

    /// A page control never reached the required state
    #[error("element #{element} was not ready within {timeout:?}")]
    ElementNotFound { element: String, timeout: Duration },

    /// The element was detached while we were using it
    #[error("element #{element} went stale")]
    StaleElement { element: String },

    /// The CAPTCHA relay gave up
    #[error("CAPTCHA unavailable: {reason}")]
    CaptchaUnavailable { reason: String },

    /// Any other DevTools protocol failure
    #[error("browser automation failed: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// Encoding the record or decoding a script result
    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScraperError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScraperError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn captcha_unavailable(reason: impl Into<String>) -> Self {
        ScraperError::CaptchaUnavailable {
            reason: reason.into(),
        }
    }

    /// Whether the error is worth another attempt
    pub fn is_stale(&self) -> bool {
        matches!(self, ScraperError::StaleElement { .. })
    }
}

/// Result alias used across the crate
pub type ScraperResult<T> = Result<T, ScraperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_stale_is_transient() {
        let stale = ScraperError::StaleElement {
            element: "captcha_image".to_string(),
        };
        let missing = ScraperError::ElementNotFound {
            element: "captcha_image".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert!(stale.is_stale());
        assert!(!missing.is_stale());
        assert!(!ScraperError::captcha_unavailable("gave up").is_stale());
    }

    #[test]
    fn io_error_names_the_path() {
        let err = ScraperError::io(
            "out/MHHC010000012023_result.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("MHHC010000012023_result.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn script_result_decode_failure_is_a_json_error() {
        let decode = serde_json::from_str::<bool>("\"interactable\"").unwrap_err();
        let err: ScraperError = decode.into();
        assert!(matches!(err, ScraperError::Json(_)));
        assert!(err.to_string().starts_with("JSON conversion failed"));
    }
}
