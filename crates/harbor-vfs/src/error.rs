use harbor_core::Cancelled;
use thiserror::Error;

/// Failures surfaced by [`crate::FileSystemResolver::resolve`] and
/// [`crate::FileSystemResolver::resolve_uri`].
///
/// The resolver performs no automatic retries; everything propagates
/// synchronously to the direct caller.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The location carries no file-system type segment before `://`.
    #[error("file system type not present in location `{uri}`")]
    MissingType { uri: String },

    /// The location is not a valid URI.
    #[error("invalid location uri `{uri}`")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// A `file://` URI that has no representable local path.
    #[error("local uri `{uri}` has no file system path")]
    InvalidLocalUri { uri: String },

    /// No registered instance matches the `(type[, id])` derived from the
    /// URI.
    #[error("cannot find file system provider for uri `{uri}`")]
    ProviderNotFound { uri: String },

    /// The selected instance failed to map the URI to a path.
    ///
    /// The provider-internal cause stays inspectable through `source`; it
    /// never crosses the resolver boundary as its own error type.
    #[error("failed to get path from uri `{uri}`: {source:#}")]
    Resolution { uri: String, source: anyhow::Error },

    /// Lazily building the snapshot failed before resolution could start.
    #[error(transparent)]
    Reload(#[from] ReloadError),
}

/// Failures raised while rebuilding the file system snapshot.
///
/// A failed reload publishes nothing; the previous snapshot (if any) remains
/// current so callers keep working with last-known-good data.
#[derive(Debug, Error)]
pub enum ReloadError {
    /// A provider's enumeration failed.
    #[error("provider for type `{fs_type}` failed to enumerate file systems: {source:#}")]
    Enumeration { fs_type: String, source: anyhow::Error },

    /// Two providers produced instances with the same id.
    #[error("duplicate virtual file system id `{id}` (type `{fs_type}`)")]
    DuplicateId { fs_type: String, id: String },

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}
