//! File selection.
//!
//! Narrows the files listed at a revision by extension suffix, by language
//! (mapped to suffixes through an embedded table), and by glob patterns.
//! Globs use shell semantics where `*` does not cross a `/`.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use rust_embed::Embed;
use serde::Deserialize;

use crate::error::{FameError, Result};

/// Embedded configuration tables
#[derive(Embed)]
#[folder = "configs/"]
struct Configs;

const LANGUAGE_TABLE: &str = "language_extensions.json";

#[derive(Debug, Deserialize)]
struct Language {
    name: String,
    extensions: Vec<String>,
}

/// Extensions for the named languages. Names match case-insensitively;
/// unknown names are skipped with a warning.
pub fn language_extensions(languages: &[String]) -> Result<Vec<String>> {
    if languages.is_empty() {
        return Ok(Vec::new());
    }

    let table = Configs::get(LANGUAGE_TABLE)
        .ok_or_else(|| FameError::Internal(format!("Missing embedded {}", LANGUAGE_TABLE)))?;
    let known: Vec<Language> = serde_json::from_slice(&table.data)?;

    let mut extensions = Vec::new();
    for wanted in languages {
        let wanted = wanted.to_lowercase();
        match known.iter().find(|l| l.name.to_lowercase() == wanted) {
            Some(language) => extensions.extend(language.extensions.iter().cloned()),
            None => tracing::warn!("Unknown language '{}' ignored", wanted),
        }
    }
    Ok(extensions)
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(GlobBuilder::new(pattern).literal_separator(true).build()?);
    }
    Ok(Some(builder.build()?))
}

#[derive(Debug, Default)]
pub struct FileFilter {
    extensions: Vec<String>,
    language_extensions: Vec<String>,
    exclude: Option<GlobSet>,
    restrict_to: Option<GlobSet>,
}

impl FileFilter {
    pub fn new(
        extensions: &[String],
        languages: &[String],
        exclude: &[String],
        restrict_to: &[String],
    ) -> Result<Self> {
        Ok(Self {
            extensions: extensions.to_vec(),
            language_extensions: language_extensions(languages)?,
            exclude: build_globset(exclude)?,
            restrict_to: build_globset(restrict_to)?,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        let has_suffix = |suffixes: &[String]| {
            suffixes.is_empty() || suffixes.iter().any(|s| path.ends_with(s.as_str()))
        };

        if !has_suffix(&self.extensions) || !has_suffix(&self.language_extensions) {
            return false;
        }
        if self.exclude.as_ref().is_some_and(|set| set.is_match(path)) {
            return false;
        }
        self.restrict_to.as_ref().is_none_or(|set| set.is_match(path))
    }

    /// Keep matching files, preserving order.
    pub fn apply(&self, files: Vec<String>) -> Vec<String> {
        let before = files.len();
        let kept: Vec<String> = files.into_iter().filter(|f| self.matches(f)).collect();
        tracing::debug!("Filter kept {} of {} files", kept.len(), before);
        kept
    }
}
