//! Loading module-surface documents.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ModuleSurface;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no surface document for module `{0}`")]
    UnknownModule(String),
    #[error("failed to read surface document for `{module}`")]
    Io {
        module: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed surface document for `{module}`")]
    Parse {
        module: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to scan surface directory `{}`", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves dotted module identifiers to their exported surface.
///
/// Failures are fatal to the run: the linter neither retries nor suppresses
/// them.
pub trait SurfaceProvider {
    fn load(&self, module: &str) -> Result<ModuleSurface, LoadError>;

    /// The module identifiers this provider knows about, sorted.
    fn modules(&self) -> Result<Vec<String>, LoadError>;
}

/// A provider backed by one JSON document per module, named
/// `<module>.json`, under a single directory.
#[derive(Debug)]
pub struct JsonSurfaceProvider {
    root: PathBuf,
}

impl JsonSurfaceProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SurfaceProvider for JsonSurfaceProvider {
    fn load(&self, module: &str) -> Result<ModuleSurface, LoadError> {
        let path = self.root.join(format!("{module}.json"));
        if !path.is_file() {
            return Err(LoadError::UnknownModule(module.to_string()));
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
            module: module.to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
            module: module.to_string(),
            source,
        })
    }

    fn modules(&self) -> Result<Vec<String>, LoadError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| LoadError::Scan {
            path: self.root.clone(),
            source,
        })?;
        let mut modules = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LoadError::Scan {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    modules.push(stem.to_string());
                }
            }
        }
        modules.sort_unstable();
        Ok(modules)
    }
}
