use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the resolver and its configuration layer.
///
/// A failed lookup is not an error for [`PathResolver::resolve`]; the
/// `NotFound` variant exists for callers of `require` that want to
/// propagate it with `?`.
///
/// [`PathResolver::resolve`]: crate::PathResolver::resolve
#[derive(Error, Debug)]
pub enum SearchPathError {
    /// No candidate path existed for `name`.
    #[error("`{name}` not found in search path")]
    NotFound { name: String },

    /// A `find` pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Variable references were still present after the pass cap.
    #[error("variable expansion of `{input}` did not settle after {passes} passes")]
    ExpansionLimit { input: String, passes: usize },

    /// A settings file could not be read, parsed or written.
    #[error("settings file `{path}`: {reason}")]
    Config { path: PathBuf, reason: String },

    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
