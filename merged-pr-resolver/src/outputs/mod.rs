//! GitHub Actions step outputs.
//!
//! This module publishes a resolved [`PullRequestRecord`] as step outputs,
//! either through the `GITHUB_OUTPUT` file or the legacy `set-output`
//! command when no output file is available.

pub mod command;
mod error;

pub use error::OutputError;

use crate::resolver::PullRequestRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the step output file.
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Where step outputs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Append heredoc blocks to the runner's output file.
    File(PathBuf),
    /// Print `::set-output` commands on stdout.
    Stdout,
}

/// Publishes step outputs to the configured sink.
#[derive(Debug, Clone)]
pub struct StepOutputs {
    sink: OutputSink,
}

impl StepOutputs {
    /// Creates a publisher for an explicit sink.
    pub fn new(sink: OutputSink) -> Self {
        Self { sink }
    }

    /// Selects the sink from `GITHUB_OUTPUT`, falling back to stdout.
    pub fn from_env() -> Self {
        let sink = std::env::var_os(OUTPUT_FILE_ENV)
            .filter(|path| !path.is_empty())
            .map(|path| OutputSink::File(PathBuf::from(path)))
            .unwrap_or(OutputSink::Stdout);
        Self { sink }
    }

    /// Returns the configured sink.
    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Sets a single step output.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] if the output file cannot be written.
    pub fn set(&self, name: &str, value: &str) -> Result<(), OutputError> {
        debug!(name, "Setting output");
        match &self.sink {
            OutputSink::File(path) => {
                let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
                let block = command::format_file_command(name, value, &delimiter)?;
                append(path, &block)
            }
            OutputSink::Stdout => {
                println!(
                    "{}",
                    command::format_command("set-output", &[("name", name)], value)
                );
                Ok(())
            }
        }
    }

    /// Publishes every present field of `record`.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] on the first output that cannot be written.
    pub fn publish(&self, record: &PullRequestRecord) -> Result<(), OutputError> {
        for (name, value) in record_outputs(record) {
            self.set(name, &value)?;
        }
        Ok(())
    }
}

/// Flattens a record into `(output name, value)` pairs.
///
/// A missing body becomes an empty string. Labels and assignees are joined
/// with newlines and left out entirely when absent.
pub fn record_outputs(record: &PullRequestRecord) -> Vec<(&'static str, String)> {
    let mut outputs = vec![
        ("title", record.title.clone()),
        ("body", record.body.clone().unwrap_or_default()),
        ("headBranch", record.head_branch.clone()),
        ("baseBranch", record.base_branch.clone()),
        ("number", record.number.to_string()),
    ];
    if let Some(labels) = &record.labels {
        outputs.push(("labels", labels.join("\n")));
    }
    if let Some(assignees) = &record.assignees {
        outputs.push(("assignees", assignees.join("\n")));
    }
    outputs
}

fn append(path: &Path, block: &str) -> Result<(), OutputError> {
    let io_error = |source: std::io::Error| OutputError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    file.write_all(block.as_bytes()).map_err(io_error)
}
