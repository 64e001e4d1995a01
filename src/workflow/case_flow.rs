//! Case search flow - workflow layer
//!
//! The complete check for one CNR:
//! 1. enter the CNR
//! 2. relay the CAPTCHA to a human
//! 3. submit and wait for the case details
//! 4. extract, classify, log
//! 5. write `<cnr>_result.json`
//!
//! Holds no browser; the caller owns the session and closes it.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::ScraperResult;
use crate::infrastructure::PageDriver;
use crate::models::CaseStatusRecord;
use crate::services::{
    extract_case_details, AnswerProvider, CaptchaRelay, Clock, FormSubmitter, ImageViewer,
    ListingClassifier, ResultWriter,
};
use crate::utils::logging::log_case_status;

pub struct CaseSearchFlow {
    submitter: FormSubmitter,
    relay: CaptchaRelay,
    classifier: ListingClassifier,
    writer: ResultWriter,
}

impl CaseSearchFlow {
    pub fn new(
        config: &Config,
        answers: Arc<dyn AnswerProvider>,
        viewer: Arc<dyn ImageViewer>,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            submitter: FormSubmitter::new(config),
            relay: CaptchaRelay::new(config, answers, viewer),
            classifier: ListingClassifier::new(clock),
            writer: ResultWriter::new(config.output_dir.clone()),
        }
    }

    /// Runs the whole check; nothing is written unless every step before the write succeeded
    ///
    /// # Arguments
    /// - `driver`: an open page; the caller closes it
    /// - `cnr`: case number record to look up
    ///
    /// # Returns
    /// The record that was written to `<cnr>_result.json`
    pub async fn run<D: PageDriver>(&self, driver: &D, cnr: &str) -> ScraperResult<CaseStatusRecord> {
        self.submitter.enter_case_number(driver, cnr).await?;

        let captcha_text = self.relay.solve(driver).await?;

        self.submitter.submit(driver, &captcha_text).await?;
        self.submitter.await_case_details(driver).await?;

        let html = driver.page_source().await?;
        let case = extract_case_details(&html);
        let outcome = self.classifier.classify(&case.next_hearing_date, &case.court_name);
        let record = CaseStatusRecord::new(cnr, case, outcome);

        log_case_status(&record);

        let path = self.writer.write(&record)?;
        info!("✓ Results saved to {}", path.display());

        Ok(record)
    }
}
