pub mod captcha_relay;
pub mod form_submitter;
pub mod human_input;
pub mod listing_classifier;
pub mod result_extractor;
pub mod result_writer;

pub use captcha_relay::CaptchaRelay;
pub use form_submitter::FormSubmitter;
pub use human_input::{AnswerProvider, ConsoleAnswerProvider, ImageViewer, SystemImageViewer};
pub use listing_classifier::{Clock, FixedClock, ListingClassifier, LocalClock};
pub use result_extractor::extract_case_details;
pub use result_writer::ResultWriter;
