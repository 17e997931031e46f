//! Locate files (configuration, content, assets) across an ordered set of
//! candidate directories.
//!
//! ```no_run
//! use searchpath::PathResolver;
//!
//! let mut resolver = PathResolver::new("~/wall/content:$WALL_ASSETS");
//! resolver.append_suffixes(["png", "jpg"]);
//! if let Some(path) = resolver.resolve("logo") {
//!     println!("{}", path.display());
//! }
//! ```

pub mod cli;
pub mod env;
pub mod fs_op;
pub mod logging;
pub mod search_path;
pub mod settings;

pub use crate::env::{Environment, MapEnv, ProcessEnv};
pub use crate::fs_op::{FileSystem, MemoryFs, RealFs};
pub use crate::search_path::{PathResolver, SearchPathError, Token};
pub use crate::settings::Settings;
