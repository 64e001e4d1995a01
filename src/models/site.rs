//! DOM landmarks of the eCourts CNR search page.
//!
//! These track the live site layout; when the site changes, this is the file to edit.

/// Case number (CNR) text box
pub const CASE_INPUT_ID: &str = "cino";
/// CAPTCHA image on the search form
pub const CAPTCHA_IMAGE_ID: &str = "captcha_image";
/// CAPTCHA answer text box
pub const CAPTCHA_INPUT_ID: &str = "fcaptcha_code";
pub const SEARCH_BUTTON_ID: &str = "search-btn";
/// Container rendered once a case has been found
pub const RESULT_CONTAINER_ID: &str = "case_status_details";

pub const CASE_TYPE_SELECTOR: &str = "label.case_type_cls";
pub const COURT_NAME_SELECTOR: &str = "label.court_name_cls";
pub const HISTORY_TABLE_SELECTOR: &str = "table.history_table";

/// Zero-based column of the hearing date in a history row
pub const HEARING_DATE_COLUMN: usize = 2;
