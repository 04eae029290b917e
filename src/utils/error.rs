//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs.

use thiserror::Error;

/// Errors returned by the profile dispatcher
///
/// Every variant carries the profile kind that was requested so the
/// boundary layer can report it verbatim.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("profile error ({0}): profile not found")]
    NotFound(String),

    #[error("profile error ({kind}): failed to write profile: {source}")]
    Write {
        kind: String,
        #[source]
        source: SamplerError,
    },

    #[error("profile error ({kind}): failed to parse profile: {source}")]
    Parse {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ProfileError {
    /// Profile kind the failed request asked for
    pub fn kind(&self) -> &str {
        match self {
            ProfileError::NotFound(kind) => kind,
            ProfileError::Write { kind, .. } | ProfileError::Parse { kind, .. } => kind,
        }
    }
}

/// Errors surfaced by the tool boundary
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("profile argument is required and must be a string")]
    MissingProfile,

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Errors raised by a sampler while producing serialized profile bytes
#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("profile kind {0} is not registered with this sampler")]
    Unregistered(String),

    #[error("cpu profiling is already active")]
    CpuSessionActive,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("profile endpoint returned HTTP {0}")]
    Status(u16),

    #[error("failed to encode profile: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur during flamegraph generation
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("Empty stack data")]
    EmptyStacks,

    #[error("Failed to generate flamegraph: {0}")]
    GenerationFailed(String),

    #[error("Flamegraph output is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
