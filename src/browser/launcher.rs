use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::browser::session::BrowserSession;
use crate::config::Config;
use crate::error::{ScraperError, ScraperResult};

/// Launches a browser window for the CNR search.
///
/// The window is visible unless `config.headless` is set, because the CAPTCHA
/// element screenshot is unreliable without real rendering.
pub async fn launch_browser(config: &Config) -> ScraperResult<BrowserSession> {
    info!("🚀 Setting up browser...");

    let browser_config = build_browser_config(config)?;

    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
        error!("Browser launch failed: {}", e);
        ScraperError::Environment {
            reason: format!("could not start Chrome/Chromium: {}", e),
        }
    })?;
    debug!("Browser process started");

    // pump CDP events in the background
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // give the browser a moment to register its first target
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = match browser.new_page("about:blank").await {
        Ok(page) => page,
        Err(e) => {
            error!("Creating page failed: {}", e);
            handler_task.abort();
            return Err(e.into());
        }
    };
    debug!("Blank page ready");

    Ok(BrowserSession::new(browser, page, handler_task))
}

fn build_browser_config(config: &Config) -> ScraperResult<BrowserConfig> {
    let mut builder = BrowserConfig::builder()
        .window_size(config.window_width, config.window_height)
        .viewport(Viewport {
            width: config.window_width,
            height: config.window_height,
            device_scale_factor: None,
            emulating_mobile: false,
            is_landscape: true,
            has_touch: false,
        })
        .no_sandbox()
        .arg("--disable-dev-shm-usage")
        .arg(format!("--user-agent={}", config.user_agent));

    builder = if config.headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };

    if let Some(executable) = &config.chrome_executable {
        debug!("Using browser executable {}", executable.display());
        builder = builder.chrome_executable(executable);
    }

    builder.build().map_err(|e| {
        error!("Browser configuration failed: {}", e);
        ScraperError::Environment {
            reason: format!("invalid browser configuration: {}", e),
        }
    })
}
