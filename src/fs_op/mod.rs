//! Filesystem collaborators for the resolver.
//!
//! - `stat`: the [`FileSystem`] trait and the real-disk backend
//! - `memory`: an in-memory backend that records probes

pub mod memory;
pub mod stat;

pub use memory::MemoryFs;
pub use stat::{FileSystem, PathType, RealFs};
