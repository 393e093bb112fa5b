//! All error types for the xcodeloc crate.
//!
//! These are returned from the fallible setup paths (config loading, file
//! enumeration) and from tool spawning. Non-zero exits of the external tool
//! are not errors here; see [`crate::runner::ToolOutcome`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid language tag `{0}`: expected a BCP 47 language identifier")]
    InvalidLanguage(String),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to run `{program}`: {message}")]
    Tool { program: String, message: String },
}

impl Error {
    /// Creates a tool-spawn error for the given program.
    pub fn tool_error(program: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Tool {
            program: program.into(),
            message: message.into(),
        }
    }
}
