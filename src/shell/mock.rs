//! Mock process runner for testing.
//!
//! `RecordingRunner` implements [`ProcessRunner`] without spawning anything.
//! It records every invocation and answers with scripted exit codes.
//!
//! # Example
//!
//! ```
//! use aiobuild::shell::{CommandOptions, Invocation, ProcessRunner, RecordingRunner};
//!
//! let runner = RecordingRunner::new();
//! runner.respond("isort", &[1]);
//!
//! let ok = runner
//!     .run(&Invocation::new("python3").args(["-m", "black", "src"]), &CommandOptions::default())
//!     .unwrap();
//! let failed = runner
//!     .run(&Invocation::new("python3").args(["-m", "isort", "src"]), &CommandOptions::default())
//!     .unwrap();
//!
//! assert!(ok.success);
//! assert_eq!(failed.exit_code, Some(1));
//! assert_eq!(runner.calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use crate::error::Result;

use super::command::{CommandOptions, CommandResult, Invocation, ProcessRunner};

struct Rule {
    fragment: String,
    codes: VecDeque<i32>,
    stderr: String,
}

/// Process runner that records invocations and returns scripted results.
///
/// Rules are matched in registration order against the invocation's
/// display string. A rule's exit codes are consumed one per matching call;
/// the last code repeats once the queue is down to one entry. Invocations
/// matching no rule exit 0.
#[derive(Default)]
pub struct RecordingRunner {
    rules: RefCell<Vec<Rule>>,
    calls: RefCell<Vec<Invocation>>,
}

impl RecordingRunner {
    /// Create a runner where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script exit codes for invocations containing `fragment`.
    pub fn respond(&self, fragment: &str, codes: &[i32]) {
        self.respond_with_stderr(fragment, codes, "");
    }

    /// Like [`respond`](Self::respond), also returning `stderr` text.
    pub fn respond_with_stderr(&self, fragment: &str, codes: &[i32], stderr: &str) {
        self.rules.borrow_mut().push(Rule {
            fragment: fragment.to_string(),
            codes: codes.iter().copied().collect(),
            stderr: stderr.to_string(),
        });
    }

    /// Every invocation seen so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Invocations whose display string contains `fragment`.
    pub fn calls_matching(&self, fragment: &str) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|inv| inv.to_string().contains(fragment))
            .cloned()
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation, _options: &CommandOptions) -> Result<CommandResult> {
        self.calls.borrow_mut().push(invocation.clone());
        let display = invocation.to_string();

        let mut rules = self.rules.borrow_mut();
        let Some(rule) = rules.iter_mut().find(|r| display.contains(&r.fragment)) else {
            return Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            ));
        };

        let code = if rule.codes.len() > 1 {
            rule.codes.pop_front().unwrap_or(0)
        } else {
            rule.codes.front().copied().unwrap_or(0)
        };

        if code == 0 {
            Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        } else {
            Ok(CommandResult::failure(
                Some(code),
                String::new(),
                rule.stderr.clone(),
                Duration::ZERO,
            ))
        }
    }
}
