//! CAPTCHA relay - service layer
//!
//! Screenshots the CAPTCHA, shows it to a human and returns what they typed.
//! Only a stale image is retried; a missing image or any other failure ends the run.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{ScraperError, ScraperResult};
use crate::infrastructure::{wait_for_element, PageDriver, Readiness};
use crate::models::site::CAPTCHA_IMAGE_ID;
use crate::services::human_input::{AnswerProvider, ImageViewer};

pub struct CaptchaRelay {
    answers: Arc<dyn AnswerProvider>,
    viewer: Arc<dyn ImageViewer>,
    image_path: PathBuf,
    max_attempts: usize,
    locate_timeout: Duration,
    poll_interval: Duration,
    stale_backoff: Duration,
}

impl CaptchaRelay {
    pub fn new(config: &Config, answers: Arc<dyn AnswerProvider>, viewer: Arc<dyn ImageViewer>) -> Self {
        Self {
            answers,
            viewer,
            image_path: config.captcha_path.clone(),
            max_attempts: config.captcha_attempts.max(1),
            locate_timeout: config.timeouts.captcha_image(),
            poll_interval: config.timeouts.poll_interval(),
            stale_backoff: config.timeouts.stale_backoff(),
        }
    }

    /// Returns the human's answer for the CAPTCHA currently on the page
    ///
    /// # Arguments
    /// - `driver`: page showing the CAPTCHA image
    ///
    /// # Returns
    /// The trimmed, non-empty answer, or `CaptchaUnavailable` when the image is
    /// missing, stays stale for every attempt, or the human gives no answer
    pub async fn solve<D: PageDriver>(&self, driver: &D) -> ScraperResult<String> {
        for attempt in 1..=self.max_attempts {
            match self.capture(driver).await {
                Ok(()) => return self.ask_human().await,
                Err(e) if e.is_stale() => {
                    warn!(
                        "CAPTCHA element became stale. Retrying ({}/{})...",
                        attempt, self.max_attempts
                    );
                    if attempt < self.max_attempts {
                        sleep(self.stale_backoff).await;
                    }
                }
                Err(ScraperError::ElementNotFound { .. }) => {
                    error!("Could not find the CAPTCHA image on the page.");
                    return Err(ScraperError::captcha_unavailable("CAPTCHA image not found on the page"));
                }
                Err(e) => {
                    error!("Capturing the CAPTCHA failed: {}", e);
                    return Err(e);
                }
            }
        }

        error!("Failed to capture CAPTCHA after multiple attempts.");
        Err(ScraperError::captcha_unavailable(format!(
            "CAPTCHA image stayed stale for {} attempts",
            self.max_attempts
        )))
    }

    async fn capture<D: PageDriver>(&self, driver: &D) -> ScraperResult<()> {
        wait_for_element(
            driver,
            CAPTCHA_IMAGE_ID,
            Readiness::Present,
            self.locate_timeout,
            self.poll_interval,
        )
        .await?;
        driver.capture_element(CAPTCHA_IMAGE_ID, &self.image_path).await
    }

    async fn ask_human(&self) -> ScraperResult<String> {
        match self.viewer.show(&self.image_path) {
            Ok(()) => info!("CAPTCHA image opened in your default image viewer."),
            Err(e) => warn!(
                "Could not open image automatically ({}). Please open '{}' manually.",
                e,
                self.image_path.display()
            ),
        }

        // the prompt blocks on stdin; keep it off the runtime so the CDP pump keeps running
        let answers = Arc::clone(&self.answers);
        let image_path = self.image_path.clone();
        let answer = tokio::task::spawn_blocking(move || answers.answer(&image_path))
            .await
            .map_err(|e| ScraperError::captcha_unavailable(format!("CAPTCHA prompt aborted: {}", e)))
            .and_then(|answer| answer);

        remove_image(&self.image_path);

        let answer = answer?.trim().to_string();
        if answer.is_empty() {
            return Err(ScraperError::captcha_unavailable("empty CAPTCHA answer"));
        }
        Ok(answer)
    }
}

fn remove_image(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        warn!("Could not delete {}: {}", path.display(), e);
    }
}
