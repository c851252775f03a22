//! Subprocess execution.

pub mod command;
pub mod mock;

pub use command::{
    execute, CommandOptions, CommandResult, Invocation, ProcessRunner, SystemRunner,
};
pub use mock::RecordingRunner;
