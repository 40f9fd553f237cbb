use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Stable identifier for a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(Arc<str>);

impl ProjectId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque project context handle.
///
/// Providers receive a `Project` when enumerating their available file
/// systems; what they make of it (workspace lookup, credentials scope, ...)
/// is up to them. The handle is cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    local_root: Option<PathBuf>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>) -> Self {
        Self {
            id: id.into(),
            local_root: None,
        }
    }

    pub fn with_local_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.local_root = Some(root.into());
        self
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// The project's root directory on the local disk, if it has one.
    pub fn local_root(&self) -> Option<&Path> {
        self.local_root.as_deref()
    }
}

impl From<&str> for Project {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
