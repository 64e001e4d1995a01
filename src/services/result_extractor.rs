//! Result extractor - service layer
//!
//! Reads case details out of the result page markup. Missing structure is never
//! an error: each field falls back to its placeholder.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::models::case_status::{ExtractedCase, NOT_AVAILABLE, NOT_LISTED};
use crate::models::site::{
    CASE_TYPE_SELECTOR, COURT_NAME_SELECTOR, HEARING_DATE_COLUMN, HISTORY_TABLE_SELECTOR,
};

macro_rules! selector {
    ($e: expr) => {{
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($e).unwrap());
        &*SELECTOR
    }};
}

/// Pulls case type, court and next hearing date out of the result page
///
/// # Arguments
/// - `html`: full page source after the case details rendered
///
/// # Returns
/// Always a value; absent fields hold `Not Available` / `Not Listed`
pub fn extract_case_details(html: &str) -> ExtractedCase {
    let document = Html::parse_document(html);

    ExtractedCase {
        case_type: first_text(&document, selector!(CASE_TYPE_SELECTOR))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        court_name: first_text(&document, selector!(COURT_NAME_SELECTOR))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        next_hearing_date: next_hearing_date(&document).unwrap_or_else(|| NOT_LISTED.to_string()),
    }
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(element_text)
}

/// Third cell of the first row in the hearing history body
fn next_hearing_date(document: &Html) -> Option<String> {
    let table = document.select(selector!(HISTORY_TABLE_SELECTOR)).next()?;
    let body = table.select(selector!("tbody")).next()?;
    let first_row = body.select(selector!("tr")).next()?;
    let cells: Vec<ElementRef> = first_row.select(selector!("td")).collect();
    cells.get(HEARING_DATE_COLUMN).map(|cell| element_text(*cell))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
