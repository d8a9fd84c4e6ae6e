//! I/O modules for catalog loading.

pub mod async_loader;
pub mod catalog_loader;

// Re-export commonly used types
pub use async_loader::{AsyncLoader, LoadResult};
pub use catalog_loader::LoadingState;
