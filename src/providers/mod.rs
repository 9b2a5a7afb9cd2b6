use anyhow::Result;
use log::debug;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod conanfile_provider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Could not find {} in the root of this project.", .0.display())]
    FileMissing(PathBuf),
    #[error("Could not find a version string in {}.", .0.display())]
    VersionNotFound(PathBuf),
}

/// The result of a successful scan: the extracted value, where it was found,
/// and the untouched line it came from (terminator included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedVersion {
    pub value: String,
    pub line_index: usize,
    pub line: String,
}

/// A provider knows how to read and rewrite the version string for one
/// project-file convention. The scan and rewrite algorithms live here as
/// default methods; implementations supply the target file and the
/// line-capture pattern.
pub trait VersionProvider {
    /// Conventional name of the target file, e.g. `conanfile.py`.
    fn filename(&self) -> &str;

    /// Resolved path of the target file.
    fn file(&self) -> &Path;

    /// Per-line pattern with a named group isolating the version text.
    fn version_pattern(&self) -> Result<Regex>;

    /// Name of the capture group in [`Self::version_pattern`].
    fn capture_group(&self) -> &str {
        "version"
    }

    fn check_exists(&self) -> Result<()> {
        if !self.file().exists() {
            return Err(ProviderError::FileMissing(self.file().to_path_buf()).into());
        }
        Ok(())
    }

    /// Reads the target file from disk and returns its lines in order, each
    /// keeping its original terminator so that concatenation reproduces the
    /// file byte-for-byte. Every call re-reads; nothing is cached.
    fn lines(&self) -> Result<Vec<String>> {
        self.check_exists()?;
        let contents = std::fs::read_to_string(self.file())?;
        Ok(contents.split_inclusive('\n').map(str::to_owned).collect())
    }

    /// Scans the file top to bottom and returns the first line matching the
    /// version pattern. Later matching lines are ignored.
    fn find_version(&self) -> Result<LocatedVersion> {
        let pattern = self.version_pattern()?;
        for (line_index, line) in self.lines()?.into_iter().enumerate() {
            if let Some(captures) = pattern.captures(&line) {
                if let Some(capture) = captures.name(self.capture_group()) {
                    let value = strip_quoted(capture.as_str());
                    debug!("Found version {:?} on line {}", value, line_index);
                    return Ok(LocatedVersion { value, line_index, line });
                }
            }
        }

        // Reached the end of the file without a match
        let resolved = std::fs::canonicalize(self.file())
            .unwrap_or_else(|_| self.file().to_path_buf());
        Err(ProviderError::VersionNotFound(resolved).into())
    }

    /// Returns the current version string, quotes and whitespace stripped.
    fn get_version(&self) -> Result<String> {
        Ok(self.find_version()?.value)
    }

    /// Replaces the current version with `version` and rewrites the file.
    /// Only the matched line changes; every other byte is preserved.
    fn set_version(&self, version: &str) -> Result<()> {
        let mut lines = self.lines()?;
        let located = self.find_version()?;

        // Stripping only trims the ends of the capture, so a non-empty value
        // is always a substring of its own line. An empty value would turn
        // the replace below into an insert at column zero; reject it.
        if located.value.is_empty() {
            return Err(ProviderError::VersionNotFound(self.file().to_path_buf()).into());
        }

        let replaced = located.line.replacen(&located.value, version, 1);
        debug!(
            "Rewriting line {}: {:?} -> {:?}",
            located.line_index, located.line, replaced
        );
        lines[located.line_index] = replaced;

        std::fs::write(self.file(), lines.concat())?;
        Ok(())
    }
}

/// Strips one layer of surrounding quotes, then whitespace, from a captured
/// value: a double-quote pass, a single-quote pass, and a trim, each end
/// handled independently. A value whose content itself starts or ends with a
/// quote character comes out mangled; that matches the line-scan contract,
/// which treats the file as opaque text and does not unescape anything.
fn strip_quoted(raw: &str) -> String {
    let mut value = raw;
    value = value.strip_prefix('"').unwrap_or(value);
    value = value.strip_suffix('"').unwrap_or(value);
    value = value.strip_prefix('\'').unwrap_or(value);
    value = value.strip_suffix('\'').unwrap_or(value);
    value.trim().to_owned()
}
