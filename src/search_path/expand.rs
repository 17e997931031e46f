//! `$NAME` / `${NAME}` substitution and leading `~` expansion.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::error::SearchPathError;
use crate::env::Environment;

/// Upper bound on substitution passes for a single string.
pub const MAX_EXPANSION_PASSES: usize = 16;

static VAR_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)\}|\$([A-Za-z0-9_]+)").expect("variable pattern is valid")
});

/// Replace every variable reference in `s` with its value from `env`.
///
/// Unset variables expand to the empty string. Substitution is repeated
/// while the result still contains a reference, so a variable whose value
/// names another variable resolves fully. A `$` that does not start a
/// reference is kept literally.
pub fn expand_vars<E: Environment + ?Sized>(s: &str, env: &E) -> Result<String, SearchPathError> {
    let (value, settled) = substitute(s, env);
    if !settled {
        return Err(SearchPathError::ExpansionLimit {
            input: s.to_string(),
            passes: MAX_EXPANSION_PASSES,
        });
    }
    Ok(value)
}

/// Run at most [`MAX_EXPANSION_PASSES`] substitution passes. The flag is
/// `false` when references were still left after the last pass.
pub(crate) fn substitute<E: Environment + ?Sized>(s: &str, env: &E) -> (String, bool) {
    let mut current = s.to_string();
    for _ in 0..MAX_EXPANSION_PASSES {
        if !VAR_REF.is_match(&current) {
            return (current, true);
        }
        current = VAR_REF
            .replace_all(&current, |caps: &Captures| {
                let name = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map_or("", |m| m.as_str());
                env.var_or_empty(name)
            })
            .into_owned();
    }
    let settled = !VAR_REF.is_match(&current);
    (current, settled)
}

/// Replace a single leading `~` with `$HOME`. `~user` forms are not
/// recognised: only the tilde character itself is replaced.
pub fn expand_tilde<E: Environment + ?Sized>(s: &str, env: &E) -> String {
    match s.strip_prefix('~') {
        Some(rest) => format!("{}{}", env.var_or_empty("HOME"), rest),
        None => s.to_string(),
    }
}
