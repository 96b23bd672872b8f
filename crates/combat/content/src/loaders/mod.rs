//! Content loaders for reading combat definitions from files.
//!
//! Loaders convert RON definition files into the core registries. All of them
//! delegate validation to the registry constructors, so a loader success means
//! the definitions are fully usable.

pub mod abilities;
pub mod factory;
pub mod stats;

pub use abilities::AbilityLoader;
pub use factory::{ContentFactory, bundled_registries};
pub use stats::StatLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
