//! Filesystem adapters: `LocalFilesystem` for real runs, `MemoryFilesystem`
//! for tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
