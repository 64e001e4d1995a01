//! Application entry - orchestration layer
//!
//! Owns the browser session for the length of one run and guarantees it is
//! closed whether the check succeeds or aborts.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::browser;
use crate::config::Config;
use crate::error::ScraperResult;
use crate::infrastructure::ScopedSession;
use crate::models::CaseStatusRecord;
use crate::services::{ConsoleAnswerProvider, LocalClock, SystemImageViewer};
use crate::utils::logging::log_startup;
use crate::workflow::CaseSearchFlow;

pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Launches a browser and checks `cnr` with a console CAPTCHA prompt
    pub async fn check_case(&self, cnr: &str) -> Result<CaseStatusRecord> {
        log_startup(cnr, &self.config);

        let session = browser::launch_browser(&self.config)
            .await
            .context("could not provision a browser")?;

        let flow = CaseSearchFlow::new(
            &self.config,
            Arc::new(ConsoleAnswerProvider),
            Arc::new(SystemImageViewer),
            LocalClock,
        );

        run_in_session(session, &flow, cnr)
            .await
            .with_context(|| format!("case check for CNR {} aborted", cnr))
    }

    /// Cause list download is not implemented; only explains that
    pub fn download_cause_list(&self) {
        error!("This feature is highly dependent on the specific court's website structure and is currently a placeholder.");
        info!("The CNR search feature is the recommended way to check for listings.");
    }
}

/// Runs `flow` against `session`, then closes the session on every path
///
/// # Arguments
/// - `session`: consumed; closed even when the flow fails
/// - `flow`: the configured check
/// - `cnr`: case number record
///
/// # Returns
/// The flow's outcome; a failed close is only logged
pub async fn run_in_session<S: ScopedSession>(
    session: S,
    flow: &CaseSearchFlow,
    cnr: &str,
) -> ScraperResult<CaseStatusRecord> {
    let outcome = flow.run(&session, cnr).await;

    if let Err(e) = session.close().await {
        warn!("Closing the browser session failed: {}", e);
    }

    outcome
}
