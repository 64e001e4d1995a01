//! Page driver - infrastructure layer
//!
//! The only capabilities the workflow needs from a browser tab, expressed as a trait
//! so the whole search flow can run against a scripted page in tests.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::error::{ScraperError, ScraperResult};

/// Observed state of a DOM element, looked up by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementState {
    /// Not in the document
    Missing,
    /// In the document but hidden or disabled
    Present,
    /// Visible and enabled
    Interactable,
}

/// What a wait considers "ready"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Present,
    Interactable,
}

impl Readiness {
    fn satisfied_by(self, state: ElementState) -> bool {
        match self {
            Readiness::Present => state != ElementState::Missing,
            Readiness::Interactable => state == ElementState::Interactable,
        }
    }
}

/// Browser tab operations used by the case search
#[allow(async_fn_in_trait)]
pub trait PageDriver {
    async fn navigate(&self, url: &str) -> ScraperResult<()>;

    async fn element_state(&self, element_id: &str) -> ScraperResult<ElementState>;

    /// Focuses the element and types `text` into it
    async fn type_text(&self, element_id: &str, text: &str) -> ScraperResult<()>;

    async fn click(&self, element_id: &str) -> ScraperResult<()>;

    /// Saves a PNG of just this element's box to `path`
    async fn capture_element(&self, element_id: &str, path: &Path) -> ScraperResult<()>;

    /// Serialised DOM of the current page
    async fn page_source(&self) -> ScraperResult<String>;
}

/// A page driver that owns a browser and must be released explicitly
#[allow(async_fn_in_trait)]
pub trait ScopedSession: PageDriver {
    async fn close(self) -> ScraperResult<()>;
}

/// Polls `element_id` until it reaches `readiness` or `timeout` elapses
pub async fn wait_for_element<D: PageDriver>(
    driver: &D,
    element_id: &str,
    readiness: Readiness,
    timeout: Duration,
    poll_interval: Duration,
) -> ScraperResult<()> {
    let deadline = Instant::now() + timeout;
    loop {
        let state = driver.element_state(element_id).await?;
        if readiness.satisfied_by(state) {
            debug!("#{} is {:?}", element_id, state);
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(ScraperError::ElementNotFound {
                element: element_id.to_string(),
                timeout,
            });
        }
        sleep(poll_interval).await;
    }
}
