//! Run configuration: the project registry and the supported-language list.
//!
//! Loaded once per run from a TOML file. Every path in the file is relative to
//! the file's own directory and is resolved to an absolute path at load time;
//! the process working directory is never consulted afterwards.
//!
//! ```toml
//! tool = "xcodebuild"
//! languages = ["en", "fr", "zh-Hans"]
//!
//! [projects.DocumentsApp]
//! project = "../Documents/Documents.xcodeproj"
//! localizations = "../Documents/Localization"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// The external localization tool invoked when the config names none.
pub const DEFAULT_TOOL: &str = "xcodebuild";

#[derive(Debug, Deserialize)]
struct RawConfig {
    tool: Option<String>,
    languages: Vec<String>,
    projects: BTreeMap<String, RawProject>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    project: PathBuf,
    localizations: PathBuf,
}

/// One registry entry: a project file and the directory holding its flat
/// `.xliff` files. Both paths are absolute after loading.
///
/// The localization directory need not exist for export (the external tool
/// creates output there), but must exist and contain translation files for
/// import to do anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub project: PathBuf,
    pub localizations: PathBuf,
}

/// Immutable per-run configuration. Projects are ordered by name, languages in
/// declared order.
#[derive(Debug, Clone)]
pub struct Config {
    pub tool: String,
    pub languages: Vec<String>,
    pub projects: Vec<Project>,
}

impl Config {
    /// Load a config file, validate the language list, and resolve every
    /// registry path against the file's own directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&text, base)
    }

    /// Parse config text, resolving relative paths against `base`.
    pub fn parse(text: &str, base: &Path) -> Result<Self, Error> {
        let raw: RawConfig = toml::from_str(text)?;

        for lang in &raw.languages {
            validate_language(lang)?;
        }

        let projects = raw
            .projects
            .into_iter()
            .map(|(name, p)| Project {
                name,
                project: absolutize(base, &p.project),
                localizations: absolutize(base, &p.localizations),
            })
            .collect();

        Ok(Config {
            tool: raw.tool.unwrap_or_else(|| DEFAULT_TOOL.to_string()),
            languages: raw.languages,
            projects,
        })
    }
}

fn validate_language(tag: &str) -> Result<(), Error> {
    if tag.is_empty() || tag.parse::<LanguageIdentifier>().is_err() {
        return Err(Error::InvalidLanguage(tag.to_string()));
    }
    Ok(())
}

/// Join `path` onto `base` (unless already absolute) and normalize `.` and
/// `..` components lexically, without touching the filesystem.
fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root disappears, as in os.path.abspath.
                if !out.pop() && !out.has_root() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
