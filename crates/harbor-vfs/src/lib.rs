//! Virtual file system addressing layer for Harbor.
//!
//! This crate resolves abstract location references — plain local paths or
//! URI-encoded locations tagged with a file-system type and instance id —
//! into concrete paths on one of several pluggable virtual file systems:
//!
//! - [`VirtualFileSystem`] / [`FileSystemProvider`] are the backend contract.
//!   Concrete backends (cloud storage, archives, ...) live elsewhere and are
//!   handed to the resolver through a [`ProviderRegistry`].
//! - [`FileSystemResolver`] is the per-project core: it builds an immutable
//!   [`Snapshot`] of all currently available instances, answers resolution
//!   queries against it, and rebuilds it when the [`InvalidationBus`] reports
//!   that the set of instances changed.
//!
//! File I/O against a resolved path is out of scope here; this crate only
//! decides *where* a location lives.

mod error;
mod events;
mod fs;
mod registry;
mod resolver;
mod snapshot;
mod uri;

pub use error::{ReloadError, ResolveError};
pub use events::{InvalidationBus, InvalidationListener, SubscriptionId};
pub use fs::{FileSystemProvider, VirtualFileSystem};
pub use harbor_core::{Cancelled, Progress, Project};
pub use registry::{FileSystemDescriptor, ProviderRegistry};
pub use resolver::FileSystemResolver;
pub use snapshot::Snapshot;
pub use uri::QUERY_PARAM_FS_ID;
