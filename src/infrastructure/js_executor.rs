//! JS executor - infrastructure layer
//!
//! Owns the one `Page` of the session and only exposes "run this script".

use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::ScraperResult;
use crate::infrastructure::page_driver::ElementState;

/// Runs scripts in the session's page
///
/// - holds the only `Page`
/// - knows nothing about cases or CAPTCHAs
pub struct JsExecutor {
    page: Page,
}

impl JsExecutor {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// The underlying page, for operations that are not scripts
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Evaluates `js_code` and returns its JSON result
    pub async fn eval(&self, js_code: impl Into<String>) -> ScraperResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// Evaluates `js_code` and deserialises the result into `T`
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> ScraperResult<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    /// Reports whether the element with `element_id` exists, is visible and is enabled
    pub async fn probe_element(&self, element_id: &str) -> ScraperResult<ElementState> {
        self.eval_as(element_probe_script(element_id)?).await
    }
}

fn element_probe_script(element_id: &str) -> ScraperResult<String> {
    Ok(format!(
        r#"
        (() => {{
            const el = document.getElementById({});
            if (!el) return "missing";
            const style = window.getComputedStyle(el);
            const rect = el.getBoundingClientRect();
            const visible = style.display !== "none"
                && style.visibility !== "hidden"
                && rect.width > 0
                && rect.height > 0;
            return visible && !el.disabled ? "interactable" : "present";
        }})()
        "#,
        serde_json::to_string(element_id)?
    ))
}
