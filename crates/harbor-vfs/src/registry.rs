use std::fmt;
use std::sync::Arc;

use crate::fs::FileSystemProvider;

/// Registry entry binding a file-system type tag to its provider.
///
/// Descriptors are immutable and loaded once per process.
#[derive(Clone)]
pub struct FileSystemDescriptor {
    fs_type: String,
    provider: Arc<dyn FileSystemProvider>,
}

impl FileSystemDescriptor {
    pub fn new(fs_type: impl Into<String>, provider: Arc<dyn FileSystemProvider>) -> Self {
        Self {
            fs_type: fs_type.into(),
            provider,
        }
    }

    pub fn fs_type(&self) -> &str {
        &self.fs_type
    }

    pub fn provider(&self) -> &Arc<dyn FileSystemProvider> {
        &self.provider
    }
}

impl fmt::Debug for FileSystemDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSystemDescriptor")
            .field("fs_type", &self.fs_type)
            .finish_non_exhaustive()
    }
}

/// Explicitly assembled list of [`FileSystemDescriptor`]s for the running
/// application.
///
/// The registry is a pure lookup table: assemble it at startup (registering
/// a late-plugged provider is an explicit [`register`](Self::register) call,
/// not implicit discovery), wrap it in an `Arc`, and hand it to each
/// resolver. It is assumed static for the process lifetime after that.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    descriptors: Vec<FileSystemDescriptor>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor. Registration order is the snapshot iteration
    /// order, so the first-registered instance of a type is its default.
    pub fn register(&mut self, descriptor: FileSystemDescriptor) {
        self.descriptors.push(descriptor);
    }

    pub fn with_provider(
        mut self,
        fs_type: impl Into<String>,
        provider: Arc<dyn FileSystemProvider>,
    ) -> Self {
        self.register(FileSystemDescriptor::new(fs_type, provider));
        self
    }

    pub fn descriptors(&self) -> &[FileSystemDescriptor] {
        &self.descriptors
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
