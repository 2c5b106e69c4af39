//! Filesystem adapters.

mod local;
mod memory;
mod overlay;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
pub use overlay::OverlayFilesystem;
