//! Listing classifier - service layer
//!
//! Decides whether a hearing date is today or tomorrow.

use chrono::{Days, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::models::case_status::{ListingOutcome, NOT_LISTED};

/// Date format used by the eCourts hearing history
const HEARING_DATE_FORMAT: &str = "%d-%m-%Y";

/// chrono's `%d` also takes single digits, the site never emits them
static HEARING_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap());

/// Source of "today"
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The machine's local calendar date
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// When the hearing falls relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingDay {
    Today,
    Tomorrow,
    Other,
}

pub struct ListingClassifier {
    clock: Box<dyn Clock>,
}

impl ListingClassifier {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Classifies `date_text` and renders the status line.
    ///
    /// An unparseable date is logged and reported as not listed soon.
    ///
    /// # Arguments
    /// - `date_text`: hearing date as scraped, `dd-mm-yyyy` or a sentinel
    /// - `court_name`: used in the status line
    pub fn classify(&self, date_text: &str, court_name: &str) -> ListingOutcome {
        if date_text == NOT_LISTED {
            return ListingOutcome::default();
        }

        let Some(hearing) = parse_hearing_date(date_text) else {
            warn!("Could not parse date: {}", date_text);
            return ListingOutcome::default();
        };

        let today = self.clock.today();
        match listing_day(hearing, today) {
            ListingDay::Today => ListingOutcome {
                is_listed_soon: true,
                listing_status: format!(
                    "Case is listed TODAY ({}) in {}.",
                    hearing.format(HEARING_DATE_FORMAT),
                    court_name
                ),
            },
            ListingDay::Tomorrow => ListingOutcome {
                is_listed_soon: true,
                listing_status: format!(
                    "Case is listed TOMORROW ({}) in {}.",
                    hearing.format(HEARING_DATE_FORMAT),
                    court_name
                ),
            },
            ListingDay::Other => ListingOutcome::default(),
        }
    }
}

impl Default for ListingClassifier {
    fn default() -> Self {
        Self::new(LocalClock)
    }
}

/// Strict `dd-mm-yyyy` parse
pub fn parse_hearing_date(text: &str) -> Option<NaiveDate> {
    if !HEARING_DATE_SHAPE.is_match(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, HEARING_DATE_FORMAT).ok()
}

pub fn listing_day(hearing: NaiveDate, today: NaiveDate) -> ListingDay {
    if hearing == today {
        ListingDay::Today
    } else if Some(hearing) == today.checked_add_days(Days::new(1)) {
        ListingDay::Tomorrow
    } else {
        ListingDay::Other
    }
}
