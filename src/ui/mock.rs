//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use aiobuild::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Injecting isort configuration");
//! ui.success("Lint passed");
//! ui.output("{}");
//!
//! assert!(ui.messages().contains(&"Injecting isort configuration".to_string()));
//! assert_eq!(ui.outputs(), ["{}"]);
//! assert!(ui.successes().contains(&"Lint passed".to_string()));
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    outputs: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    commands: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Data written via `output`.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Messages shown via `message`.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Messages shown via `success`.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Messages shown via `warning`.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Messages shown via `error`.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Headers shown via `show_header`.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Commands echoed via `show_command`.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl UserInterface for MockUI {
    fn output(&mut self, data: &str) {
        self.outputs.push(data.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_each_channel() {
        let mut ui = MockUI::new();
        ui.output("o");
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.show_header("h");
        ui.show_command("c");

        assert_eq!(ui.outputs(), ["o"]);
        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(ui.headers(), ["h"]);
        assert_eq!(ui.commands(), ["c"]);
    }
}
