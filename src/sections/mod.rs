//! Configuration section injection.
//!
//! - [`writer`] - Idempotent, append-only [`SectionWriter`]
//! - [`templates`] - Built-in sections for the quality tools

pub mod templates;
pub mod writer;

pub use templates::known_sections;
pub use writer::{InjectOutcome, Section, SectionWriter};
