//! Idempotent section injection.
//!
//! Sections are opaque text blobs keyed by name. A section is appended to
//! the target file only when its `[name]` marker does not already occur
//! anywhere in the file; existing content is never rewritten, reordered or
//! truncated. The check and the append are not atomic, which is fine for a
//! single developer-invoked process.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::ui::UserInterface;

/// A named configuration section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Unique key within the target file.
    pub name: String,
    /// Text appended verbatim when the section is absent.
    pub body: String,
}

impl Section {
    /// Create a section.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// The bracketed marker whose presence means "already configured".
    pub fn marker(&self) -> String {
        format!("[{}]", self.name)
    }
}

/// What [`SectionWriter::inject`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// The body was appended.
    Injected,
    /// The marker was already present; the file was left untouched.
    AlreadyPresent,
}

/// Writes sections into one target file.
#[derive(Debug, Clone)]
pub struct SectionWriter {
    path: PathBuf,
}

impl SectionWriter {
    /// Create a writer for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the file exists and contains `section`.
    pub fn inject(&self, section: &Section, ui: &mut dyn UserInterface) -> Result<InjectOutcome> {
        if !self.path.exists() {
            debug!("Creating empty {}", self.path.display());
            fs::write(&self.path, "")?;
        }

        // Bytes, not text: the file may hold non-UTF-8 comments.
        let contents = fs::read(&self.path)?;
        if contains_bytes(&contents, section.marker().as_bytes()) {
            debug!("{} already configured", section.name);
            return Ok(InjectOutcome::AlreadyPresent);
        }

        ui.message(&format!(
            "{} has not been configured. Injecting configuration",
            section.name
        ));

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(section.body.as_bytes())?;
        debug!(
            "Appended {} bytes for {} to {}",
            section.body.len(),
            section.name,
            self.path.display()
        );

        Ok(InjectOutcome::Injected)
    }

    /// Inject each section in order.
    pub fn inject_all(
        &self,
        sections: &[Section],
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<InjectOutcome>> {
        sections.iter().map(|s| self.inject(s, ui)).collect()
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
