//! Scripted stand-ins for the browser page and the human.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ecourts_checker::config::{Config, Timeouts};
use ecourts_checker::services::{AnswerProvider, ImageViewer};
use ecourts_checker::{ElementState, PageDriver, ScopedSession, ScraperError, ScraperResult};

/// Millisecond timeouts so "never appears" cases finish quickly
pub fn fast_config(dir: &Path) -> Config {
    Config {
        output_dir: dir.to_path_buf(),
        captcha_path: dir.join("captcha.png"),
        timeouts: Timeouts {
            case_input_ms: 50,
            captcha_image_ms: 50,
            search_button_ms: 50,
            result_ms: 50,
            poll_interval_ms: 5,
            stale_backoff_ms: 5,
        },
        ..Config::default()
    }
}

/// Result page in the shape eCourts renders it
pub fn result_page(case_type: &str, court_name: &str, hearing_date: &str) -> String {
    format!(
        r#"<html><body>
        <div id="case_status_details">
          <label class="case_type_cls">{case_type}</label>
          <label class="court_name_cls">{court_name}</label>
          <table class="history_table">
            <tbody>
              <tr><td>Principal Judge</td><td>01-01-2024</td><td>{hearing_date}</td><td>Arguments</td></tr>
            </tbody>
          </table>
        </div>
        </body></html>"#
    )
}

/// What a capture attempt does
#[derive(Debug, Clone, Copy)]
pub enum CaptureStep {
    Stale,
    Fail,
}

/// Everything the page saw, shared with the test after the page is consumed
#[derive(Debug, Default)]
pub struct PageLog {
    pub visited: Mutex<Vec<String>>,
    pub typed: Mutex<Vec<(String, String)>>,
    pub clicked: Mutex<Vec<String>>,
    pub captures: AtomicUsize,
    pub closed: AtomicBool,
}

impl PageLog {
    pub fn typed(&self) -> Vec<(String, String)> {
        self.typed.lock().unwrap().clone()
    }

    pub fn clicked(&self) -> Vec<String> {
        self.clicked.lock().unwrap().clone()
    }

    pub fn captures(&self) -> usize {
        self.captures.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

pub struct FakePage {
    html: String,
    missing: HashSet<String>,
    capture_plan: Mutex<VecDeque<CaptureStep>>,
    log: Arc<PageLog>,
}

impl FakePage {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            missing: HashSet::new(),
            capture_plan: Mutex::new(VecDeque::new()),
            log: Arc::new(PageLog::default()),
        }
    }

    /// The element with `id` never appears
    pub fn without(mut self, id: &str) -> Self {
        self.missing.insert(id.to_string());
        self
    }

    /// Outcomes for the first capture attempts; later attempts succeed
    pub fn capture_plan(self, steps: impl IntoIterator<Item = CaptureStep>) -> Self {
        self.capture_plan.lock().unwrap().extend(steps);
        self
    }

    pub fn log(&self) -> Arc<PageLog> {
        Arc::clone(&self.log)
    }
}

impl PageDriver for FakePage {
    async fn navigate(&self, url: &str) -> ScraperResult<()> {
        self.log.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }

    async fn element_state(&self, element_id: &str) -> ScraperResult<ElementState> {
        if self.missing.contains(element_id) {
            Ok(ElementState::Missing)
        } else {
            Ok(ElementState::Interactable)
        }
    }

    async fn type_text(&self, element_id: &str, text: &str) -> ScraperResult<()> {
        self.log
            .typed
            .lock()
            .unwrap()
            .push((element_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn click(&self, element_id: &str) -> ScraperResult<()> {
        self.log.clicked.lock().unwrap().push(element_id.to_string());
        Ok(())
    }

    async fn capture_element(&self, element_id: &str, path: &Path) -> ScraperResult<()> {
        self.log.captures.fetch_add(1, Ordering::SeqCst);
        let step = self.capture_plan.lock().unwrap().pop_front();
        match step {
            Some(CaptureStep::Stale) => Err(ScraperError::StaleElement {
                element: element_id.to_string(),
            }),
            Some(CaptureStep::Fail) => Err(ScraperError::io(
                path,
                io::Error::new(io::ErrorKind::Other, "screenshot failed"),
            )),
            None => std::fs::write(path, b"\x89PNG fake").map_err(|e| ScraperError::io(path, e)),
        }
    }

    async fn page_source(&self) -> ScraperResult<String> {
        Ok(self.html.clone())
    }
}

impl ScopedSession for FakePage {
    async fn close(self) -> ScraperResult<()> {
        self.log.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Always types the same text, and remembers whether the image existed when asked
pub struct ScriptedAnswers {
    text: String,
    pub asked: AtomicUsize,
    pub image_seen: Mutex<Option<PathBuf>>,
}

impl ScriptedAnswers {
    pub fn new(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: text.to_string(),
            asked: AtomicUsize::new(0),
            image_seen: Mutex::new(None),
        })
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl AnswerProvider for ScriptedAnswers {
    fn answer(&self, image_path: &Path) -> ScraperResult<String> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        if image_path.exists() {
            *self.image_seen.lock().unwrap() = Some(image_path.to_path_buf());
        }
        Ok(self.text.clone())
    }
}

pub struct FakeViewer {
    fail: bool,
    pub shown: AtomicUsize,
}

impl FakeViewer {
    pub fn working() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            shown: AtomicUsize::new(0),
        })
    }

    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            shown: AtomicUsize::new(0),
        })
    }
}

impl ImageViewer for FakeViewer {
    fn show(&self, _image_path: &Path) -> io::Result<()> {
        self.shown.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(io::Error::new(io::ErrorKind::NotFound, "no viewer installed"))
        } else {
            Ok(())
        }
    }
}
