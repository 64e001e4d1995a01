pub mod case_status;
pub mod site;

pub use case_status::{CaseStatusRecord, ExtractedCase, ListingOutcome};
