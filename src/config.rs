use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ScraperError, ScraperResult};

/// Program configuration
///
/// Built-in defaults, then an optional TOML file, then environment variables.
/// Command-line flags are applied last by the binary.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// eCourts services entry page
    pub base_url: String,
    /// Directory the `<cnr>_result.json` file is written to
    pub output_dir: PathBuf,
    /// Where the CAPTCHA screenshot is stored while the user reads it
    pub captcha_path: PathBuf,
    /// Run without a visible window (CAPTCHA capture is less reliable)
    pub headless: bool,
    /// Explicit Chrome/Chromium binary; autodetected when unset
    pub chrome_executable: Option<PathBuf>,
    pub window_width: u32,
    pub window_height: u32,
    pub user_agent: String,
    /// Total CAPTCHA capture attempts when the image goes stale
    pub captcha_attempts: usize,
    pub verbose_logging: bool,
    pub timeouts: Timeouts,
}

/// Bounded waits, in milliseconds
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    pub case_input_ms: u64,
    pub captcha_image_ms: u64,
    pub search_button_ms: u64,
    pub result_ms: u64,
    pub poll_interval_ms: u64,
    pub stale_backoff_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://services.ecourts.gov.in/ecourtindia_v6/".to_string(),
            output_dir: PathBuf::from("."),
            captcha_path: PathBuf::from("captcha.png"),
            headless: false,
            chrome_executable: None,
            window_width: 1280,
            window_height: 720,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/98.0.4758.102 Safari/537.36"
                .to_string(),
            captcha_attempts: 3,
            verbose_logging: false,
            timeouts: Timeouts::default(),
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            case_input_ms: 20_000,
            captcha_image_ms: 10_000,
            search_button_ms: 10_000,
            result_ms: 20_000,
            poll_interval_ms: 250,
            stale_backoff_ms: 1_000,
        }
    }
}

impl Timeouts {
    pub fn case_input(&self) -> Duration {
        Duration::from_millis(self.case_input_ms)
    }

    pub fn captcha_image(&self) -> Duration {
        Duration::from_millis(self.captcha_image_ms)
    }

    pub fn search_button(&self) -> Duration {
        Duration::from_millis(self.search_button_ms)
    }

    pub fn result(&self) -> Duration {
        Duration::from_millis(self.result_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn stale_backoff(&self) -> Duration {
        Duration::from_millis(self.stale_backoff_ms)
    }
}

impl Config {
    /// Defaults overlaid with environment variables
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Loads `path` (if any) on top of the defaults, then applies the environment
    pub fn load(path: Option<&Path>) -> ScraperResult<Self> {
        let config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env())
    }

    pub fn from_toml_file(path: &Path) -> ScraperResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScraperError::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| ScraperError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env(self) -> Self {
        Self {
            base_url: std::env::var("ECOURTS_BASE_URL").unwrap_or(self.base_url),
            output_dir: std::env::var("ECOURTS_OUTPUT_DIR").map(PathBuf::from).unwrap_or(self.output_dir),
            captcha_path: std::env::var("ECOURTS_CAPTCHA_PATH").map(PathBuf::from).unwrap_or(self.captcha_path),
            headless: std::env::var("ECOURTS_HEADLESS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.headless),
            chrome_executable: std::env::var("ECOURTS_CHROME_PATH").ok().map(PathBuf::from).or(self.chrome_executable),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_site_workflow() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://services.ecourts.gov.in/ecourtindia_v6/");
        assert_eq!((config.window_width, config.window_height), (1280, 720));
        assert!(!config.headless);
        assert_eq!(config.captcha_attempts, 3);
        assert_eq!(config.timeouts.case_input(), Duration::from_secs(20));
        assert_eq!(config.timeouts.search_button(), Duration::from_secs(10));
        assert_eq!(config.timeouts.stale_backoff(), Duration::from_secs(1));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            output_dir = "results"
            headless = true

            [timeouts]
            result_ms = 45000
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert!(config.headless);
        assert_eq!(config.timeouts.result(), Duration::from_secs(45));
        assert_eq!(config.timeouts.case_input(), Duration::from_secs(20));
        assert_eq!(config.captcha_path, PathBuf::from("captcha.png"));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ecourts.toml");
        std::fs::write(&path, "captcha_attempts = \"three\"").unwrap();

        let err = Config::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, ScraperError::Config { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_toml_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ScraperError::Io { .. }));
    }
}
