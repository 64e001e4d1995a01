//! # eCourts Checker
//!
//! Looks up a case on the eCourts India services portal by its CNR and reports
//! whether the next hearing is today or tomorrow.
//!
//! ## Architecture
//!
//! ### ① Infrastructure
//! - `infrastructure/` - owns the scarce resource (the page), exposes capabilities only
//! - `PageDriver` - the browser operations the search needs, mockable in tests
//! - `JsExecutor` - the single page owner, provides `eval()`
//!
//! ### ② Services
//! - `services/` - "what can I do", one concern each
//! - `FormSubmitter` - CNR form and search button
//! - `CaptchaRelay` - screenshot, show, ask a human, retry when stale
//! - `extract_case_details` / `ListingClassifier` / `ResultWriter`
//!
//! ### ③ Workflow
//! - `workflow/` - `CaseSearchFlow`, the full check for one CNR
//!
//! ### ④ Orchestration
//! - `orchestrator/` - `App`, launches and always closes the browser

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

pub use browser::{launch_browser, BrowserSession};
pub use config::Config;
pub use error::{ScraperError, ScraperResult};
pub use infrastructure::{ElementState, PageDriver, ScopedSession};
pub use models::CaseStatusRecord;
pub use orchestrator::{run_in_session, App};
pub use workflow::CaseSearchFlow;
