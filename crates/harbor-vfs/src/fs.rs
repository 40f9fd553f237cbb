use std::path::PathBuf;
use std::sync::Arc;

use harbor_core::{Progress, Project};
use url::Url;

/// A named, addressable storage backend exposing path resolution.
///
/// The trait is intentionally small: identity plus URI-to-path mapping. Read
/// and write semantics of the backend are not part of this contract.
///
/// Identity is the `(fs_type, id)` pair; it must be stable for the lifetime
/// of the instance and unique within one snapshot.
pub trait VirtualFileSystem: Send + Sync {
    /// File-system type tag, e.g. `"s3"`. Matches the URI scheme of the
    /// locations this backend serves.
    fn fs_type(&self) -> &str;

    /// Instance id, unique among all instances of all types in a snapshot.
    fn id(&self) -> &str;

    /// Maps a location URI to a concrete path inside this backend.
    ///
    /// May perform I/O (network round-trips, filesystem stats) and block for
    /// the duration. Backend-specific failures propagate as `anyhow::Error`;
    /// the resolver rewraps them before they reach callers.
    fn resolve_path(&self, progress: &Progress, uri: &Url) -> anyhow::Result<PathBuf>;
}

/// Factory that discovers the [`VirtualFileSystem`] instances currently
/// available for a project.
pub trait FileSystemProvider: Send + Sync {
    /// Enumerates the instances this provider makes available for `project`,
    /// in the provider's own order.
    ///
    /// Any failure aborts the reload that invoked it; no partial snapshot is
    /// published.
    fn available_file_systems(
        &self,
        progress: &Progress,
        project: &Project,
    ) -> anyhow::Result<Vec<Arc<dyn VirtualFileSystem>>>;
}
