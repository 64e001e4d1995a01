use serde::{Deserialize, Serialize};

/// Placeholder for a field the result page did not carry
pub const NOT_AVAILABLE: &str = "N/A";
/// Placeholder when the hearing history has no usable date column
pub const NOT_LISTED: &str = "Not listed";
/// Status text for every case that is not heard today or tomorrow
pub const NOT_LISTED_SOON: &str = "Not listed in the next 2 days.";

/// Fields read from the eCourts result page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCase {
    pub case_type: String,
    pub court_name: String,
    pub next_hearing_date: String,
}

/// What the listing classifier decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOutcome {
    pub is_listed_soon: bool,
    pub listing_status: String,
}

impl Default for ListingOutcome {
    fn default() -> Self {
        Self {
            is_listed_soon: false,
            listing_status: NOT_LISTED_SOON.to_string(),
        }
    }
}

/// The record persisted for one run
///
/// Key names follow the JSON the eCourts checker has always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStatusRecord {
    pub cnr: String,
    pub case_type: String,
    pub court_name: String,
    pub next_hearing_date: String,
    pub is_listed_soon: bool,
    pub listing_status: String,
}

impl CaseStatusRecord {
    pub fn new(cnr: impl Into<String>, case: ExtractedCase, outcome: ListingOutcome) -> Self {
        Self {
            cnr: cnr.into(),
            case_type: case.case_type,
            court_name: case.court_name,
            next_hearing_date: case.next_hearing_date,
            is_listed_soon: outcome.is_listed_soon,
            listing_status: outcome.listing_status,
        }
    }
}
