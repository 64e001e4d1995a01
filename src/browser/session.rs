//! Scoped browser session.
//!
//! Owns the browser process, the page and the CDP event pump. `close` shuts the
//! browser down cleanly; dropping the session without it still aborts the pump,
//! and chromiumoxide kills the child process when `Browser` drops.

use std::path::Path;

use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::error::CdpError;
use chromiumoxide::{Browser, Element, Page};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{ScraperError, ScraperResult};
use crate::infrastructure::{ElementState, JsExecutor, PageDriver, ScopedSession};

/// CDP messages that mean a node we held was detached by a re-render
const STALE_NODE_MESSAGES: &[&str] = &[
    "does not belong to the document",
    "No node with given id",
    "Node is detached",
];

pub struct BrowserSession {
    browser: Browser,
    executor: JsExecutor,
    handler_task: Option<JoinHandle<()>>,
}

impl BrowserSession {
    pub fn new(browser: Browser, page: Page, handler_task: JoinHandle<()>) -> Self {
        Self {
            browser,
            executor: JsExecutor::new(page),
            handler_task: Some(handler_task),
        }
    }

    fn page(&self) -> &Page {
        self.executor.page()
    }

    async fn element(&self, element_id: &str) -> ScraperResult<Element> {
        self.page()
            .find_element(format!("#{}", element_id))
            .await
            .map_err(|e| classify(e, element_id))
    }

    /// Closes the browser and waits for the process to exit
    pub async fn close_browser(mut self) -> ScraperResult<()> {
        info!("Closing browser session");
        self.browser.close().await?;
        if let Err(e) = self.browser.wait().await {
            warn!("Browser process did not exit cleanly: {}", e);
        }
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
    }
}

impl PageDriver for BrowserSession {
    async fn navigate(&self, url: &str) -> ScraperResult<()> {
        self.page().goto(url).await?;
        debug!("Navigated to {}", url);
        Ok(())
    }

    async fn element_state(&self, element_id: &str) -> ScraperResult<ElementState> {
        self.executor.probe_element(element_id).await
    }

    async fn type_text(&self, element_id: &str, text: &str) -> ScraperResult<()> {
        let element = self.element(element_id).await?;
        element
            .click()
            .await
            .map_err(|e| classify(e, element_id))?
            .type_str(text)
            .await
            .map_err(|e| classify(e, element_id))?;
        Ok(())
    }

    async fn click(&self, element_id: &str) -> ScraperResult<()> {
        let element = self.element(element_id).await?;
        element.click().await.map_err(|e| classify(e, element_id))?;
        Ok(())
    }

    async fn capture_element(&self, element_id: &str, path: &Path) -> ScraperResult<()> {
        let element = self.element(element_id).await?;
        element
            .save_screenshot(CaptureScreenshotFormat::Png, path)
            .await
            .map_err(|e| classify(e, element_id))?;
        Ok(())
    }

    async fn page_source(&self) -> ScraperResult<String> {
        Ok(self.page().content().await?)
    }
}

impl ScopedSession for BrowserSession {
    async fn close(self) -> ScraperResult<()> {
        self.close_browser().await
    }
}

fn classify(err: CdpError, element_id: &str) -> ScraperError {
    if is_stale_message(&err.to_string()) {
        ScraperError::StaleElement {
            element: element_id.to_string(),
        }
    } else {
        ScraperError::Browser(err)
    }
}

fn is_stale_message(message: &str) -> bool {
    STALE_NODE_MESSAGES.iter().any(|m| message.contains(m))
}
