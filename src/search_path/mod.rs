//! Ordered search-path resolution.
//!
//! A [`PathResolver`] holds a duplicate-free list of directories and
//! suffixes and answers two questions: where is the first existing file
//! for a name (`resolve`), and which files are available (`find`).
//!
//! # Design
//!
//! - Inputs are [`Token`]s: strings, `:`-joined strings, or nested lists
//! - `$VAR`, `${VAR}` and a leading `~` are expanded when entries are added
//! - A miss is `None`, not an error; unreadable directories are skipped

mod error;
mod expand;
mod resolver;
mod scan;
mod token;

pub use error::SearchPathError;
pub use expand::{expand_tilde, expand_vars, MAX_EXPANSION_PASSES};
pub use resolver::PathResolver;
pub use token::Token;
