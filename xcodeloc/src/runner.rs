//! The external tool seam.
//!
//! [`ToolRunner`] abstracts the two `xcodebuild` localization invocations so
//! the orchestrator can be exercised without spawning processes. The real
//! implementation, [`Xcodebuild`], blocks on the child and captures its
//! output; it never interprets the exit status itself.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// Exit status and captured output of one external invocation.
///
/// `success` mirrors the child's exit status; stdout/stderr are lossily
/// decoded. Returned even for failed invocations — only a spawn failure
/// surfaces as [`Error::Tool`].
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Executes one localization command against the external tool.
pub trait ToolRunner {
    /// `-importLocalizations`: merge one translation file into the project.
    fn import(&self, project: &Path, xliff: &Path) -> Result<ToolOutcome, Error>;

    /// `-exportLocalizations`: produce a `<lang>.xcloc` bundle under the
    /// localization directory.
    fn export(&self, project: &Path, localizations: &Path, lang: &str)
    -> Result<ToolOutcome, Error>;
}

/// Runs the configured tool binary (normally `xcodebuild`) synchronously.
#[derive(Debug, Clone)]
pub struct Xcodebuild {
    program: String,
}

impl Xcodebuild {
    pub fn new(program: impl Into<String>) -> Self {
        Xcodebuild {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&OsStr]) -> Result<ToolOutcome, Error> {
        let out = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| Error::tool_error(&self.program, e.to_string()))?;

        Ok(ToolOutcome {
            success: out.status.success(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}

impl ToolRunner for Xcodebuild {
    fn import(&self, project: &Path, xliff: &Path) -> Result<ToolOutcome, Error> {
        self.run(&[
            OsStr::new("-importLocalizations"),
            OsStr::new("-project"),
            project.as_os_str(),
            OsStr::new("-localizationPath"),
            xliff.as_os_str(),
        ])
    }

    fn export(
        &self,
        project: &Path,
        localizations: &Path,
        lang: &str,
    ) -> Result<ToolOutcome, Error> {
        self.run(&[
            OsStr::new("-exportLocalizations"),
            OsStr::new("-project"),
            project.as_os_str(),
            OsStr::new("-localizationPath"),
            localizations.as_os_str(),
            OsStr::new("-exportLanguage"),
            OsStr::new(lang),
        ])
    }
}
