#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod outputs;
pub mod resolver;
pub mod runner;

pub use config::{parse_api_url, ConfigError, Repository, DEFAULT_API_URL};
pub use outputs::{record_outputs, OutputError, OutputSink, StepOutputs};
pub use resolver::{
    find_merged_pull_request, resolve, PullRequestEntry, PullRequestRecord, ResolveError,
};
pub use runner::{report_failure, Runner, RunnerConfig, RunnerError};
