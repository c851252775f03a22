//! Probe outcome types.

/// Outcome of probing a single requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The module imported (or the executable was found).
    Loaded,

    /// The module could not be found, or the executable is not on PATH.
    ///
    /// This is the normal "missing" classification, not an error.
    NotLoadable,

    /// The module exists but raised something other than an import error
    /// while loading. Never counted as missing.
    Faulted {
        /// Last line of the interpreter's diagnostic output.
        message: String,
    },
}

impl ProbeOutcome {
    /// Whether the requirement is present and usable.
    pub fn is_loaded(&self) -> bool {
        matches!(self, ProbeOutcome::Loaded)
    }

    /// Whether the requirement counts as missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, ProbeOutcome::NotLoadable)
    }
}

/// The outcome of probing one named requirement.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Package name of the requirement that was probed.
    pub requirement: String,
    /// Name used for the import attempt or PATH lookup.
    pub probe_name: String,
    /// What the probe found.
    pub outcome: ProbeOutcome,
}
