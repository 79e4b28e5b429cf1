use std::collections::HashMap;
use std::path::PathBuf;
use lazy_static::lazy_static;
use thiserror::Error;
use crate::cli::Arguments;

// External software
pub const READ_DISTRIBUTION_TAG: &str = "read_distribution.py";
pub const SHELL_TAG: &str = "sh";


lazy_static! {
    pub static ref TOOL_VERSIONS: HashMap<&'static str, f32> = {
        let mut m = HashMap::new();
        m.insert(READ_DISTRIBUTION_TAG, 4.0);

        m
    };
}

/// Destination of a child's stderr. Stdout always belongs to the result
/// file and is never duplicated into the log.
#[derive(Debug, Clone, PartialEq)]
pub enum LogSpec {
    File(PathBuf),
    Discard,
}

impl LogSpec {
    /// Shell redirection fragment appended to the rendered command line.
    pub fn redirection(&self) -> String {
        match self {
            LogSpec::File(path) => format!("2> {}", path.display()),
            LogSpec::Discard => "2> /dev/null".to_string(),
        }
    }
}

/// Parameter view handed to the command-line generator for a single
/// read_distribution invocation. All paths are pre-resolved by the caller.
#[derive(Debug, Clone)]
pub struct ReadDistributionConfig {
    pub extra: String,
    pub input_aln: PathBuf,
    pub input_refgene: PathBuf,
    pub output: PathBuf,
    pub log: LogSpec,
}

pub struct RunConfig {
    pub cwd: PathBuf,
    pub args: Arguments,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    IOError(String),

    #[error("Failed to run {tool}: {error}")]
    ToolExecution { tool: String, error: String },

    #[error("{tool} exited with status {code}")]
    ToolFailed { tool: String, code: i32 },
}
