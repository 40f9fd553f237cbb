use std::path::PathBuf;
use std::sync::{Arc, Weak};

use harbor_core::{Progress, Project};
use parking_lot::{Mutex, RwLock};
use url::Url;

use crate::error::{ReloadError, ResolveError};
use crate::events::{InvalidationBus, InvalidationListener, SubscriptionId};
use crate::fs::VirtualFileSystem;
use crate::registry::ProviderRegistry;
use crate::snapshot::Snapshot;
use crate::uri;

/// Per-project resolver mapping abstract locations to concrete paths on one
/// of the registered virtual file systems.
///
/// The resolver keeps an immutable [`Snapshot`] of all available instances,
/// built lazily from the [`ProviderRegistry`] and rebuilt when the
/// [`InvalidationBus`] reports a change. Readers clone the current snapshot
/// `Arc` under a brief read lock and never block on an in-flight rebuild;
/// rebuilds serialize among themselves and publish a complete snapshot or
/// nothing at all.
pub struct FileSystemResolver {
    project: Project,
    registry: Arc<ProviderRegistry>,
    bus: Arc<InvalidationBus>,
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    // Serializes rebuilds; never held while a reader is served.
    reload_lock: Mutex<()>,
    subscription: Mutex<Option<SubscriptionId>>,
}

impl FileSystemResolver {
    /// Creates a resolver for `project` and subscribes it to `bus`.
    ///
    /// The cache starts absent; the first read or an explicit
    /// [`reload`](Self::reload) builds it.
    pub fn new(
        project: Project,
        registry: Arc<ProviderRegistry>,
        bus: Arc<InvalidationBus>,
    ) -> Arc<Self> {
        let resolver = Arc::new(Self {
            project,
            registry,
            bus,
            snapshot: RwLock::new(None),
            reload_lock: Mutex::new(()),
            subscription: Mutex::new(None),
        });
        let listener = Arc::downgrade(&resolver) as Weak<dyn InvalidationListener>;
        let id = resolver.bus.subscribe(listener);
        *resolver.subscription.lock() = Some(id);
        resolver
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Rebuilds the snapshot from every registered provider and atomically
    /// publishes it, replacing any prior one in full.
    ///
    /// Concurrent reloads serialize. A failing provider enumeration aborts
    /// the whole reload; the previous snapshot (if any) stays current.
    pub fn reload(&self, progress: &Progress) -> Result<(), ReloadError> {
        let _guard = self.reload_lock.lock();
        self.rebuild_locked(progress).map(|_| ())
    }

    /// Returns the current snapshot, building it first if absent.
    pub fn ensure_snapshot(&self, progress: &Progress) -> Result<Arc<Snapshot>, ReloadError> {
        if let Some(snapshot) = self.current_snapshot() {
            return Ok(snapshot);
        }
        let _guard = self.reload_lock.lock();
        // Another caller may have finished the lazy build while we waited.
        if let Some(snapshot) = self.current_snapshot() {
            return Ok(snapshot);
        }
        self.rebuild_locked(progress)
    }

    /// Resolves a location string.
    ///
    /// Inputs without a scheme separator are literal local paths and are
    /// returned directly; everything else is parsed as a URI and handed to
    /// [`resolve_uri`](Self::resolve_uri).
    pub fn resolve(&self, progress: &Progress, location: &str) -> Result<PathBuf, ResolveError> {
        match uri::split_scheme(location) {
            None => Ok(PathBuf::from(location)),
            Some(("", _)) => Err(ResolveError::MissingType {
                uri: location.to_string(),
            }),
            Some(_) => {
                let parsed = Url::parse(location).map_err(|source| ResolveError::InvalidUri {
                    uri: location.to_string(),
                    source,
                })?;
                self.resolve_uri(progress, &parsed)
            }
        }
    }

    /// Resolves a location URI to a concrete path.
    ///
    /// Disambiguation, in order:
    /// 1. `file://` URIs map straight to a local path, no provider involved.
    /// 2. The URI scheme is the file-system type.
    /// 3. The `fs` query parameter, when present, is the authoritative
    ///    instance id: it must match a registered `(type, id)` pair exactly.
    /// 4. Otherwise the host (or raw authority) is a *candidate* id: an exact
    ///    match wins, and a candidate matching nothing falls back to the
    ///    first-registered instance of the type, as does a URI carrying no id
    ///    at all.
    /// 5. No instance selected means [`ResolveError::ProviderNotFound`].
    ///
    /// Failures from the selected backend are rewrapped into
    /// [`ResolveError::Resolution`] with the URI attached; provider-internal
    /// error types never leak past this boundary.
    pub fn resolve_uri(&self, progress: &Progress, location: &Url) -> Result<PathBuf, ResolveError> {
        if uri::is_local_uri(location) {
            return uri::local_path(location).ok_or_else(|| ResolveError::InvalidLocalUri {
                uri: location.to_string(),
            });
        }
        let fs_type = location.scheme();
        let snapshot = self.ensure_snapshot(progress)?;

        let file_system = match uri::query_param(location, uri::QUERY_PARAM_FS_ID) {
            Some(id) => snapshot.select(fs_type, Some(&id)),
            None => {
                let candidate = uri::host_or_authority(location);
                candidate
                    .as_deref()
                    .and_then(|id| snapshot.select(fs_type, Some(id)))
                    .or_else(|| snapshot.select(fs_type, None))
            }
        };
        let file_system = file_system.ok_or_else(|| ResolveError::ProviderNotFound {
            uri: location.to_string(),
        })?;

        file_system
            .resolve_path(progress, location)
            .map_err(|source| ResolveError::Resolution {
                uri: location.to_string(),
                source,
            })
    }

    /// All available instances in snapshot order.
    pub fn available(
        &self,
        progress: &Progress,
    ) -> Result<Vec<Arc<dyn VirtualFileSystem>>, ReloadError> {
        Ok(self.ensure_snapshot(progress)?.iter().cloned().collect())
    }

    /// Exact `(type, id)` lookup; absence is `Ok(None)`, never an error.
    pub fn by_type_and_id(
        &self,
        progress: &Progress,
        fs_type: &str,
        id: &str,
    ) -> Result<Option<Arc<dyn VirtualFileSystem>>, ReloadError> {
        Ok(self
            .ensure_snapshot(progress)?
            .by_type_and_id(fs_type, id)
            .cloned())
    }

    /// First-registered instance of `fs_type`, if any.
    pub fn default_for_type(
        &self,
        progress: &Progress,
        fs_type: &str,
    ) -> Result<Option<Arc<dyn VirtualFileSystem>>, ReloadError> {
        Ok(self
            .ensure_snapshot(progress)?
            .default_for_type(fs_type)
            .cloned())
    }

    /// Unsubscribes from the invalidation bus. Idempotent; the `Drop` impl
    /// calls this as well.
    pub fn dispose(&self) {
        if let Some(id) = self.subscription.lock().take() {
            self.bus.unsubscribe(id);
        }
    }

    fn current_snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.read().clone()
    }

    // Caller must hold `reload_lock`.
    fn rebuild_locked(&self, progress: &Progress) -> Result<Arc<Snapshot>, ReloadError> {
        let mut builder = Snapshot::builder();
        for descriptor in self.registry.descriptors() {
            progress.check_cancelled()?;
            progress.report(&format!(
                "enumerating `{}` file systems",
                descriptor.fs_type()
            ));
            let file_systems = descriptor
                .provider()
                .available_file_systems(progress, &self.project)
                .map_err(|source| ReloadError::Enumeration {
                    fs_type: descriptor.fs_type().to_string(),
                    source,
                })?;
            for fs in file_systems {
                builder.insert(fs)?;
            }
        }
        let snapshot = Arc::new(builder.finish());
        tracing::debug!(
            target: "harbor.vfs",
            project = %self.project.id(),
            file_systems = snapshot.len(),
            "published file system snapshot"
        );
        *self.snapshot.write() = Some(snapshot.clone());
        Ok(snapshot)
    }
}

impl InvalidationListener for FileSystemResolver {
    fn file_systems_changed(&self) {
        // Invalidation is never triggered by direct interactive progress, so
        // the rebuild runs best-effort on a background context and failures
        // are logged rather than surfaced.
        if let Err(err) = self.reload(&Progress::background()) {
            tracing::warn!(
                target: "harbor.vfs",
                project = %self.project.id(),
                error = %err,
                "file system reload after invalidation failed"
            );
        }
    }
}

impl Drop for FileSystemResolver {
    fn drop(&mut self) {
        self.dispose();
    }
}
