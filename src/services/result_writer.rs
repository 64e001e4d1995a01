//! Result writer - service layer
//!
//! Only knows how to persist one finished record.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::{ScraperError, ScraperResult};
use crate::models::CaseStatusRecord;

/// Writes `<cnr>_result.json` files
///
/// An existing file for the same CNR is replaced.
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Target file for `cnr`
    pub fn path_for(&self, cnr: &str) -> PathBuf {
        self.output_dir.join(result_file_name(cnr))
    }

    /// Serialises `record` as pretty JSON
    ///
    /// # Arguments
    /// - `record`: finished record; its `cnr` names the file
    ///
    /// # Returns
    /// The path written, or `Io` if the output directory is not writable
    pub fn write(&self, record: &CaseStatusRecord) -> ScraperResult<PathBuf> {
        let path = self.path_for(&record.cnr);
        let json = to_json(record)?;
        debug!("Writing {} bytes to {}", json.len(), path.display());

        fs::write(&path, json).map_err(|e| ScraperError::io(&path, e))?;
        Ok(path)
    }
}

/// `MHHC010000012023` -> `MHHC010000012023_result.json`
///
/// Path separators are replaced so a malformed CNR cannot escape the output directory.
pub fn result_file_name(cnr: &str) -> String {
    let stem: String = cnr
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}_result.json", stem)
}

/// Pretty JSON with four-space indentation
fn to_json(record: &CaseStatusRecord) -> ScraperResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    record.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;
    use tempfile::TempDir;

    fn record(cnr: &str, status: &str) -> CaseStatusRecord {
        CaseStatusRecord {
            cnr: cnr.to_string(),
            case_type: "Civil".to_string(),
            court_name: "District Court".to_string(),
            next_hearing_date: "15-03-2024".to_string(),
            is_listed_soon: true,
            listing_status: status.to_string(),
        }
    }

    #[test]
    fn file_name_follows_the_cnr() {
        assert_eq!(result_file_name("MHHC010000012023"), "MHHC010000012023_result.json");
        assert_eq!(result_file_name("../etc/x"), ".._etc_x_result.json");
    }

    #[test]
    fn writes_all_six_keys() {
        let dir = TempDir::new().unwrap();
        let writer = ResultWriter::new(dir.path());

        let path = writer.write(&record("MHHC010000012023", "listed")).unwrap();
        assert_eq!(path, dir.path().join("MHHC010000012023_result.json"));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n    \"cnr\": \"MHHC010000012023\""));

        let json: JsonValue = serde_json::from_str(&text).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 6);
        for key in ["cnr", "case_type", "court_name", "next_hearing_date", "is_listed_soon", "listing_status"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(json["is_listed_soon"], JsonValue::Bool(true));
    }

    #[test]
    fn overwrites_previous_result() {
        let dir = TempDir::new().unwrap();
        let writer = ResultWriter::new(dir.path());

        writer.write(&record("MHHC010000012023", "first run")).unwrap();
        let path = writer.write(&record("MHHC010000012023", "second run")).unwrap();

        let saved: CaseStatusRecord = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(saved.listing_status, "second run");
    }

    #[test]
    fn unwritable_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let writer = ResultWriter::new(dir.path().join("missing"));

        let err = writer.write(&record("MHHC010000012023", "x")).unwrap_err();
        match err {
            ScraperError::Io { path, .. } => assert!(path.ends_with("MHHC010000012023_result.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
