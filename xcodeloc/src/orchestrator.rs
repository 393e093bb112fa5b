//! Import/export orchestration over the project registry.
//!
//! Both operations walk the registry in order and keep going no matter what
//! the external tool does: a failed invocation is counted in the
//! [`RunReport`] and noted on stderr, never propagated. The only errors that
//! escape are setup-level ones such as an unusable glob pattern; I/O failures
//! while flattening a bundle are likewise swallowed per-language.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{Config, Project};
use crate::error::Error;
use crate::runner::ToolRunner;

/// Per-run counters, informational only. Serialized as the optional JSON
/// run report; never consulted for control flow or exit codes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Import invocations issued (one per enumerated `.xliff`).
    pub imports_invoked: usize,
    /// Export invocations issued (one per project per language).
    pub exports_invoked: usize,
    /// Invocations that failed to spawn or exited non-zero.
    pub tool_failures: usize,
    /// Bundles flattened into the localization directory and deleted.
    pub bundles_normalized: usize,
    /// Export cycles that produced no bundle to normalize.
    pub normalizations_skipped: usize,
    /// Normalization attempts that hit an I/O error midway; the flat file
    /// or the bundle may be left in a partial state.
    pub normalization_errors: usize,
}

/// Drives the configured runner over every project in the registry.
pub struct Orchestrator<'a, R: ToolRunner> {
    config: &'a Config,
    runner: &'a R,
}

impl<'a, R: ToolRunner> Orchestrator<'a, R> {
    pub fn new(config: &'a Config, runner: &'a R) -> Self {
        Orchestrator { config, runner }
    }

    /// Import every top-level `.xliff` in each project's localization
    /// directory. Enumeration is non-recursive; anything that is not a plain
    /// file with the `.xliff` extension is ignored. A missing directory
    /// simply yields nothing.
    pub fn import_all(&self, report: &mut RunReport) -> Result<(), Error> {
        for project in &self.config.projects {
            println!("Import localization for {}", project.name);

            for xliff in enumerate_xliffs(&project.localizations)? {
                let lang = xliff
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                println!("Importing {}", lang);

                report.imports_invoked += 1;
                match self.runner.import(&project.project, &xliff) {
                    Ok(outcome) if outcome.success => {}
                    Ok(_) => {
                        report.tool_failures += 1;
                        eprintln!("note: import of {} failed for {}", lang, project.name);
                    }
                    Err(err) => {
                        report.tool_failures += 1;
                        eprintln!("note: {}", err);
                    }
                }
            }
            println!();
        }
        Ok(())
    }

    /// Export one translation file per supported language for each project,
    /// flattening each produced bundle out of its `.xcloc` directory.
    pub fn export_all(&self, report: &mut RunReport) -> Result<(), Error> {
        for project in &self.config.projects {
            println!("Export localization for {}", project.name);

            for lang in &self.config.languages {
                report.exports_invoked += 1;
                match self
                    .runner
                    .export(&project.project, &project.localizations, lang)
                {
                    Ok(outcome) if outcome.success => {}
                    Ok(_) => {
                        report.tool_failures += 1;
                        eprintln!("note: export of {} failed for {}", lang, project.name);
                    }
                    Err(err) => {
                        report.tool_failures += 1;
                        eprintln!("note: {}", err);
                    }
                }

                match normalize_export(project, lang) {
                    Ok(true) => report.bundles_normalized += 1,
                    Ok(false) => report.normalizations_skipped += 1,
                    Err(err) => {
                        report.normalization_errors += 1;
                        eprintln!("note: could not normalize {} for {}: {}", lang, project.name, err);
                    }
                }
            }
            println!();
        }
        Ok(())
    }
}

/// Top-level `*.xliff` files in `dir`, in the sorted order `glob` yields.
/// The directory portion is escaped so metacharacters in path names
/// (`App [Beta]`) match literally.
fn enumerate_xliffs(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let pattern = format!("{}/*.xliff", glob::Pattern::escape(&dir.to_string_lossy()));
    let matches = glob::glob(&pattern)?;
    Ok(matches
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect())
}

/// Flatten `<locdir>/<lang>.xcloc/Localized Contents/<lang>.xliff` out to
/// `<locdir>/<lang>.xliff`, then delete the bundle. Returns `Ok(false)` when
/// the bundle or its nested file is absent (export failed or produced
/// nothing), which skips the cycle without comment.
fn normalize_export(project: &Project, lang: &str) -> Result<bool, Error> {
    let bundle = project.localizations.join(format!("{lang}.xcloc"));
    let nested = bundle
        .join("Localized Contents")
        .join(format!("{lang}.xliff"));
    if !bundle.is_dir() || !nested.is_file() {
        return Ok(false);
    }

    let flat = project.localizations.join(format!("{lang}.xliff"));
    if flat.is_dir() {
        fs::remove_dir_all(&flat)?;
    }
    fs::copy(&nested, &flat)?;
    fs::remove_dir_all(&bundle)?;
    Ok(true)
}
