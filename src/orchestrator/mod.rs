//! Orchestration layer
//!
//! ## Responsibilities
//!
//! Acquires the browser, hands it to the workflow and releases it. It holds no
//! business logic of its own.
//!
//! ## Layering
//!
//! ```text
//! orchestrator::App (owns BrowserSession)
//!     ↓
//! workflow::CaseSearchFlow (one CNR, start to finish)
//!     ↓
//! services (form / captcha / extract / classify / write)
//!     ↓
//! infrastructure (PageDriver, JsExecutor)
//! ```

pub mod app;

pub use app::{run_in_session, App};
