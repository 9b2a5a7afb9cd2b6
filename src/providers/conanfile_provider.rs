use crate::providers::VersionProvider;
use anyhow::Result;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Conventional recipe filename looked up under a project root.
pub const CONANFILE_NAME: &str = "conanfile.py";

/// Provider for Conan recipes, where the version is an explicit `version =`
/// assignment in the conanfile.py. The recipe is treated as opaque text; only
/// the first assignment line is recognized.
pub struct ConanfileProvider {
    file: PathBuf,
}

impl ConanfileProvider {
    /// Targets the `conanfile.py` in the root of the given project.
    pub fn new(root: impl AsRef<Path>) -> Self {
        ConanfileProvider {
            file: root.as_ref().join(CONANFILE_NAME),
        }
    }

    /// Targets an explicit recipe path, conventional or not.
    pub fn from_file(file: impl Into<PathBuf>) -> Self {
        ConanfileProvider { file: file.into() }
    }
}

impl VersionProvider for ConanfileProvider {
    fn filename(&self) -> &str {
        CONANFILE_NAME
    }

    fn file(&self) -> &Path {
        &self.file
    }

    fn version_pattern(&self) -> Result<Regex> {
        // Unanchored: a `version` substring anywhere in the line matches,
        // whatever precedes it.
        Ok(Regex::new(r"(?m)\s*version\s*=\s*(?P<version>.*)$")?)
    }
}
