//! Log formatting helpers

use tracing::info;

use crate::config::Config;
use crate::models::CaseStatusRecord;

/// Startup banner
pub fn log_startup(cnr: &str, config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 eCourts case listing check");
    info!("📄 CNR: {}", cnr);
    info!("📁 Output directory: {}", config.output_dir.display());
    info!("{}", "=".repeat(60));
}

/// The "Case Status" block printed after extraction
pub fn log_case_status(record: &CaseStatusRecord) {
    info!("{}", "─".repeat(60));
    info!("--- Case Status ---");
    info!("CNR: {}", record.cnr);
    info!("Case Type: {}", record.case_type);
    info!("Court: {}", record.court_name);
    info!("Next Hearing: {}", record.next_hearing_date);
    info!("Status: {}", record.listing_status);
    info!("Note: The serial number is only available in the official cause list for the day.");
    info!("{}", "─".repeat(60));
}
