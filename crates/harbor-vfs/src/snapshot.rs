use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::ReloadError;
use crate::fs::VirtualFileSystem;

/// Immutable, point-in-time view of all currently available virtual file
/// system instances.
///
/// Entries are insertion-ordered: registry iteration order first, then each
/// provider's own enumeration order. A rebuild produces a brand-new
/// `Snapshot` rather than mutating a published one.
pub struct Snapshot {
    entries: Vec<Arc<dyn VirtualFileSystem>>,
}

impl Snapshot {
    pub(crate) fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Instances in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn VirtualFileSystem>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Single lookup helper behind both [`by_type_and_id`](Self::by_type_and_id)
    /// and [`default_for_type`](Self::default_for_type), so the
    /// first-match-by-insertion-order policy cannot drift between the two.
    pub(crate) fn select(
        &self,
        fs_type: &str,
        id: Option<&str>,
    ) -> Option<&Arc<dyn VirtualFileSystem>> {
        self.entries
            .iter()
            .find(|fs| fs.fs_type() == fs_type && id.is_none_or(|id| fs.id() == id))
    }

    /// Exact `(type, id)` match, or `None`.
    pub fn by_type_and_id(&self, fs_type: &str, id: &str) -> Option<&Arc<dyn VirtualFileSystem>> {
        self.select(fs_type, Some(id))
    }

    /// First instance of `fs_type` in insertion order, or `None`.
    ///
    /// This is an explicit "default instance of this type" policy, not
    /// alphabetical or priority-based.
    pub fn default_for_type(&self, fs_type: &str) -> Option<&Arc<dyn VirtualFileSystem>> {
        self.select(fs_type, None)
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        for fs in &self.entries {
            entries.entry(&(fs.fs_type(), fs.id()));
        }
        entries.finish()
    }
}

#[derive(Default)]
pub(crate) struct SnapshotBuilder {
    entries: Vec<Arc<dyn VirtualFileSystem>>,
    seen_ids: HashSet<String>,
}

impl SnapshotBuilder {
    /// Appends an instance, rejecting duplicate ids.
    ///
    /// Two providers registering the same id would make resolution ambiguous,
    /// so the whole rebuild fails instead of silently keeping the last write.
    pub(crate) fn insert(&mut self, fs: Arc<dyn VirtualFileSystem>) -> Result<(), ReloadError> {
        if !self.seen_ids.insert(fs.id().to_string()) {
            return Err(ReloadError::DuplicateId {
                fs_type: fs.fs_type().to_string(),
                id: fs.id().to_string(),
            });
        }
        self.entries.push(fs);
        Ok(())
    }

    pub(crate) fn finish(self) -> Snapshot {
        Snapshot {
            entries: self.entries,
        }
    }
}
