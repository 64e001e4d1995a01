pub mod launcher;
pub mod session;

pub use launcher::launch_browser;
pub use session::BrowserSession;
