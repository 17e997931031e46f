use std::path::Path;

use regex::Regex;

use super::error::SearchPathError;
use super::resolver::PathResolver;
use crate::env::Environment;
use crate::fs_op::FileSystem;

impl<F: FileSystem, E: Environment> PathResolver<F, E> {
    /// File names across every search directory, in directory order.
    ///
    /// Dotfiles are always skipped. With `pattern`, a name must contain a
    /// match. When suffixes are configured and suffixless names are not
    /// allowed, a name must also end in one of the suffixes. Directories
    /// that cannot be listed contribute nothing; the same name found in two
    /// directories is reported twice.
    pub fn find(&self, pattern: Option<&Regex>) -> Vec<String> {
        let require_suffix = !self.allow_suffixless && !self.suffixes.is_empty();
        let mut found = Vec::new();
        for dir in &self.directories {
            let entries = match self.fs.list(Path::new(dir)) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::debug!(dir = %dir, error = %e, "skipping unlistable directory");
                    continue;
                }
            };
            found.extend(entries.into_iter().filter(|name| {
                !name.starts_with('.')
                    && pattern.map_or(true, |re| re.is_match(name))
                    && (!require_suffix || self.has_configured_suffix(name))
            }));
        }
        found
    }

    /// [`find`](Self::find) with the pattern given as a string.
    pub fn find_str(&self, pattern: Option<&str>) -> Result<Vec<String>, SearchPathError> {
        let pattern = pattern.map(Regex::new).transpose()?;
        Ok(self.find(pattern.as_ref()))
    }

    fn has_configured_suffix(&self, name: &str) -> bool {
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use crate::fs_op::MemoryFs;

    fn wall_fs() -> MemoryFs {
        MemoryFs::new()
            .with_dir("/d1", ["a.jpg", ".hidden.jpg", "b.png"])
            .with_dir("/d2", ["c.jpg"])
    }

    fn resolver(fs: MemoryFs) -> PathResolver<MemoryFs, MapEnv> {
        let mut r = PathResolver::with_backends(fs, MapEnv::new());
        r.set_directories(["/d1", "/d2"]);
        r
    }

    #[test]
    fn pattern_filters_and_dotfiles_are_skipped() {
        let r = resolver(wall_fs());
        let re = Regex::new(r"\.jpg$").unwrap();
        assert_eq!(r.find(Some(&re)), vec!["a.jpg", "c.jpg"]);
    }

    #[test]
    fn no_pattern_lists_everything_visible() {
        let r = resolver(wall_fs());
        assert_eq!(r.find(None), vec!["a.jpg", "b.png", "c.jpg"]);
    }

    #[test]
    fn dotfiles_never_match_even_with_catch_all_pattern() {
        let r = resolver(wall_fs());
        let all = Regex::new("").unwrap();
        assert!(r.find(Some(&all)).iter().all(|n| !n.starts_with('.')));
    }

    #[test]
    fn configured_suffixes_filter_entries() {
        let mut r = resolver(wall_fs());
        r.set_suffixes("png");
        assert_eq!(r.find(None), vec!["b.png"]);

        r.set_allow_suffixless(true);
        assert_eq!(r.find(None), vec!["a.jpg", "b.png", "c.jpg"]);
    }

    #[test]
    fn pattern_and_suffix_filter_must_both_hold() {
        let mut r = resolver(wall_fs());
        r.set_suffixes("png");
        let re = Regex::new("^[abc]").unwrap();
        // a.jpg and c.jpg match the pattern but carry no configured suffix.
        assert_eq!(r.find(Some(&re)), vec!["b.png"]);

        let jpg_only = Regex::new(r"\.jpg$").unwrap();
        assert!(r.find(Some(&jpg_only)).is_empty());
    }

    #[test]
    fn unlistable_directories_are_skipped() {
        let fs = MemoryFs::new()
            .with_unreadable_dir("/d1")
            .with_dir("/d2", ["c.jpg"]);
        let mut r = resolver(fs);
        r.append_directories("/missing");
        assert_eq!(r.find(None), vec!["c.jpg"]);
    }

    #[test]
    fn duplicates_across_directories_are_kept() {
        let fs = MemoryFs::new()
            .with_dir("/d1", ["logo.png"])
            .with_dir("/d2", ["logo.png"]);
        let r = resolver(fs);
        assert_eq!(r.find(None), vec!["logo.png", "logo.png"]);
    }

    #[test]
    fn find_str_rejects_bad_patterns() {
        let r = resolver(wall_fs());
        assert!(matches!(
            r.find_str(Some("(")),
            Err(SearchPathError::InvalidPattern(_))
        ));
        assert_eq!(r.find_str(Some("^b")).unwrap(), vec!["b.png"]);
    }
}
