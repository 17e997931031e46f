use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::SearchPathError;
use super::token::{normalize, Target, Token};
use crate::env::{Environment, ProcessEnv};
use crate::fs_op::{FileSystem, RealFs};

// A non-dot character, a dot, then alphanumerics to the end: `photo.png`
// qualifies, `.bashrc` and `archive.` do not.
static HAS_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.]\.[A-Za-z0-9]+$").expect("extension pattern is valid"));

/// Locates files across an ordered list of directories, optionally trying
/// a list of suffixes for names given without one.
///
/// Each resolver owns its configuration; independent resolvers can coexist
/// in one process. The filesystem and environment are injected so lookups
/// can run against something other than the real disk and process
/// environment.
#[derive(Debug, Clone)]
pub struct PathResolver<F = RealFs, E = ProcessEnv> {
    pub(super) directories: Vec<String>,
    pub(super) suffixes: Vec<String>,
    pub(super) search_cwd_first: bool,
    pub(super) allow_suffixless: bool,
    pub(super) fs: F,
    env: E,
}

impl PathResolver {
    /// Resolver over the real filesystem and process environment, seeded
    /// with `initial` directories.
    pub fn new(initial: impl Into<Token>) -> Self {
        let mut resolver = Self::with_backends(RealFs, ProcessEnv);
        resolver.append_directories(initial);
        resolver
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::with_backends(RealFs, ProcessEnv)
    }
}

impl<F: FileSystem, E: Environment> PathResolver<F, E> {
    /// Empty resolver over the given backends.
    pub fn with_backends(fs: F, env: E) -> Self {
        Self {
            directories: Vec::new(),
            suffixes: Vec::new(),
            search_cwd_first: true,
            allow_suffixless: false,
            fs,
            env,
        }
    }

    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// The filesystem backend lookups are probed against.
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Extend the search path, keeping existing order and skipping
    /// entries already present.
    pub fn append_directories(&mut self, more: impl Into<Token>) -> &mut Self {
        normalize(&mut self.directories, &more.into(), Target::Directory, &self.env);
        self
    }

    /// Replace the search path.
    pub fn set_directories(&mut self, list: impl Into<Token>) -> &mut Self {
        self.directories.clear();
        self.append_directories(list)
    }

    /// Extend the suffix list. `zip` and `.zip` are the same suffix.
    pub fn append_suffixes(&mut self, more: impl Into<Token>) -> &mut Self {
        normalize(&mut self.suffixes, &more.into(), Target::Suffix, &self.env);
        self
    }

    pub fn set_suffixes(&mut self, list: impl Into<Token>) -> &mut Self {
        self.suffixes.clear();
        self.append_suffixes(list)
    }

    /// Whether `.` is probed before the configured directories.
    pub fn search_cwd_first(&self) -> bool {
        self.search_cwd_first
    }

    pub fn set_search_cwd_first(&mut self, on: bool) -> &mut Self {
        self.search_cwd_first = on;
        self
    }

    /// Whether a bare-name match anywhere in the search path beats a
    /// suffixed match when suffixes are configured.
    pub fn allow_suffixless(&self) -> bool {
        self.allow_suffixless
    }

    pub fn set_allow_suffixless(&mut self, on: bool) -> &mut Self {
        self.allow_suffixless = on;
        self
    }

    /// Find the first existing candidate for `name`.
    ///
    /// Search order, first hit wins:
    /// 1. `.` when [`search_cwd_first`](Self::search_cwd_first) is set
    /// 2. the bare name in every directory, when
    ///    [`allow_suffixless`](Self::allow_suffixless) is set and suffixes apply
    /// 3. every directory with each suffix in turn (or the bare name when no
    ///    suffixes apply)
    ///
    /// Suffixes are not tried at all when `name` already ends in an
    /// extension. `None` means nothing matched; it is an ordinary outcome.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let suffixes: &[String] = if HAS_EXTENSION.is_match(name) {
            &[]
        } else {
            &self.suffixes
        };
        let found = self.lookup(name, suffixes);
        match &found {
            Some(path) => tracing::debug!(name, path = %path.display(), "resolved"),
            None => tracing::debug!(name, "not found in search path"),
        }
        found
    }

    /// Like [`resolve`](Self::resolve), with a miss turned into an error.
    pub fn require(&self, name: &str) -> Result<PathBuf, SearchPathError> {
        self.resolve(name).ok_or_else(|| SearchPathError::NotFound {
            name: name.to_string(),
        })
    }

    fn lookup(&self, name: &str, suffixes: &[String]) -> Option<PathBuf> {
        if self.search_cwd_first {
            if let Some(hit) = self.try_in(".", name, suffixes) {
                return Some(hit);
            }
        }
        if self.allow_suffixless && !suffixes.is_empty() {
            let bare = self
                .directories
                .iter()
                .find_map(|dir| self.try_in(dir, name, &[]));
            if bare.is_some() {
                return bare;
            }
        }
        self.directories
            .iter()
            .find_map(|dir| self.try_in(dir, name, suffixes))
    }

    fn try_in(&self, dir: &str, name: &str, suffixes: &[String]) -> Option<PathBuf> {
        if suffixes.is_empty() {
            return self.probe(candidate(dir, name, ""));
        }
        suffixes
            .iter()
            .find_map(|suffix| self.probe(candidate(dir, name, suffix)))
    }

    fn probe(&self, candidate: PathBuf) -> Option<PathBuf> {
        let hit = self.fs.exists(&candidate);
        tracing::trace!(candidate = %candidate.display(), hit, "probe");
        hit.then_some(candidate)
    }
}

// `dir/name+suffix` by concatenation: an absolute `name` stays inside
// `dir` instead of replacing it the way `Path::join` would.
fn candidate(dir: &str, name: &str, suffix: &str) -> PathBuf {
    let dir = dir.trim_end_matches('/');
    PathBuf::from(format!("{dir}/{name}{suffix}"))
}
