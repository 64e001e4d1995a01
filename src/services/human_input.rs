//! Human-in-the-loop capabilities used by the CAPTCHA relay.
//!
//! Both are traits so the relay can be driven by scripted answers in tests.

use std::io;
use std::path::Path;

use inquire::{InquireError, Text};

use crate::error::{ScraperError, ScraperResult};

/// Something that can read the CAPTCHA image and type its text
///
/// `answer` blocks for as long as the human needs.
pub trait AnswerProvider: Send + Sync {
    fn answer(&self, image_path: &Path) -> ScraperResult<String>;
}

/// Best-effort display of the saved CAPTCHA image
pub trait ImageViewer: Send + Sync {
    fn show(&self, image_path: &Path) -> io::Result<()>;
}

/// Prompts on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAnswerProvider;

impl AnswerProvider for ConsoleAnswerProvider {
    fn answer(&self, image_path: &Path) -> ScraperResult<String> {
        let help = format!("The image is saved at {}", image_path.display());
        Text::new("Please enter the CAPTCHA text from the image:")
            .with_help_message(&help)
            .prompt()
            .map_err(|e| match e {
                InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                    ScraperError::captcha_unavailable("CAPTCHA prompt was cancelled")
                }
                other => ScraperError::captcha_unavailable(format!("could not read CAPTCHA answer: {}", other)),
            })
    }
}

/// Opens the image with the platform's default viewer
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemImageViewer;

impl ImageViewer for SystemImageViewer {
    fn show(&self, image_path: &Path) -> io::Result<()> {
        open_with_default_app(image_path)
    }
}

fn open_with_default_app(path: &Path) -> io::Result<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer").arg(path).spawn()?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn()?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(path).spawn()?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "no default image viewer on this platform",
        ))
    }
}
