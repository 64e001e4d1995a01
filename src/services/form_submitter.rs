//! Form submitter - service layer
//!
//! Drives the CNR search form. Every wait is bounded and a timeout is final:
//! it means the page layout changed or the CNR/CAPTCHA was rejected.

use std::time::Duration;

use tracing::{error, info};

use crate::config::Config;
use crate::error::{ScraperError, ScraperResult};
use crate::infrastructure::{wait_for_element, PageDriver, Readiness};
use crate::models::site::{CAPTCHA_INPUT_ID, CASE_INPUT_ID, RESULT_CONTAINER_ID, SEARCH_BUTTON_ID};

pub struct FormSubmitter {
    base_url: String,
    case_input_timeout: Duration,
    search_button_timeout: Duration,
    result_timeout: Duration,
    poll_interval: Duration,
}

impl FormSubmitter {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            case_input_timeout: config.timeouts.case_input(),
            search_button_timeout: config.timeouts.search_button(),
            result_timeout: config.timeouts.result(),
            poll_interval: config.timeouts.poll_interval(),
        }
    }

    /// Opens the search page and types the CNR
    ///
    /// # Arguments
    /// - `driver`: page the form lives on
    /// - `cnr`: case number record, typed as given
    ///
    /// # Returns
    /// `ElementNotFound` if the CNR field never becomes interactable
    pub async fn enter_case_number<D: PageDriver>(&self, driver: &D, cnr: &str) -> ScraperResult<()> {
        info!("Navigating to eCourts CNR search page for CNR: {}", cnr);
        driver.navigate(&self.base_url).await?;

        self.wait(driver, CASE_INPUT_ID, Readiness::Interactable, self.case_input_timeout)
            .await?;
        driver.type_text(CASE_INPUT_ID, cnr).await
    }

    /// Types the CAPTCHA answer and presses search
    ///
    /// # Arguments
    /// - `driver`: page with the CNR already entered
    /// - `captcha_text`: the human's answer
    pub async fn submit<D: PageDriver>(&self, driver: &D, captcha_text: &str) -> ScraperResult<()> {
        self.wait(driver, CAPTCHA_INPUT_ID, Readiness::Present, self.search_button_timeout)
            .await?;
        driver.type_text(CAPTCHA_INPUT_ID, captcha_text).await?;

        info!("Submitting CNR and CAPTCHA...");
        self.wait(driver, SEARCH_BUTTON_ID, Readiness::Interactable, self.search_button_timeout)
            .await?;
        driver.click(SEARCH_BUTTON_ID).await
    }

    /// Waits for the case details container to render
    ///
    /// # Returns
    /// `ElementNotFound` when the site rejected the CNR or the CAPTCHA
    pub async fn await_case_details<D: PageDriver>(&self, driver: &D) -> ScraperResult<()> {
        match self
            .wait(driver, RESULT_CONTAINER_ID, Readiness::Present, self.result_timeout)
            .await
        {
            Ok(()) => {
                info!("Successfully fetched case details.");
                Ok(())
            }
            Err(e @ ScraperError::ElementNotFound { .. }) => {
                error!("Could not find case details. The CNR might be invalid, or the CAPTCHA failed.");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    async fn wait<D: PageDriver>(
        &self,
        driver: &D,
        element_id: &str,
        readiness: Readiness,
        timeout: Duration,
    ) -> ScraperResult<()> {
        wait_for_element(driver, element_id, readiness, timeout, self.poll_interval).await
    }
}
