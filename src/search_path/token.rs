//! Input tokens for the append/set family and the normalizer that flattens
//! them into an ordered, duplicate-free list.

use std::path::{Path, PathBuf};

use super::expand::{expand_tilde, substitute, MAX_EXPANSION_PASSES};
use crate::env::Environment;

/// One argument to a directory or suffix setter: either a single string
/// (which may itself be a `:`-joined list) or a nested list of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Single(String),
    List(Vec<Token>),
}

impl Token {
    /// The empty list; normalizing it changes nothing.
    pub fn empty() -> Self {
        Token::List(Vec::new())
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Single(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Single(s)
    }
}

impl From<&String> for Token {
    fn from(s: &String) -> Self {
        Token::Single(s.clone())
    }
}

impl From<&Path> for Token {
    fn from(p: &Path) -> Self {
        Token::Single(p.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for Token {
    fn from(p: PathBuf) -> Self {
        Token::from(p.as_path())
    }
}

impl<T: Into<Token>> From<Vec<T>> for Token {
    fn from(items: Vec<T>) -> Self {
        Token::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Token>, const N: usize> From<[T; N]> for Token {
    fn from(items: [T; N]) -> Self {
        Token::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Token>> From<&[T]> for Token {
    fn from(items: &[T]) -> Self {
        Token::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Token>> FromIterator<T> for Token {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Token::List(iter.into_iter().map(Into::into).collect())
    }
}

/// What a terminal candidate is destined for. Decides the final
/// per-entry step applied after expansion and splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    /// Leading `~` becomes `$HOME`.
    Directory,
    /// Exactly one leading `.` is enforced.
    Suffix,
}

/// Flatten `input` into `acc`, in argument order, skipping entries that
/// are empty or already present.
pub(crate) fn normalize<E>(acc: &mut Vec<String>, input: &Token, target: Target, env: &E)
where
    E: Environment + ?Sized,
{
    match input {
        Token::List(items) => {
            for item in items {
                normalize(acc, item, target, env);
            }
        }
        Token::Single(s) if s.is_empty() => {}
        Token::Single(s) => {
            let (expanded, settled) = substitute(s, env);
            if !settled {
                tracing::warn!(
                    input = %s,
                    passes = MAX_EXPANSION_PASSES,
                    "variable expansion did not settle; keeping partially expanded value"
                );
            }
            // Pieces come from an already expanded string, so they go
            // straight to the terminal step.
            for piece in expanded.split(':') {
                push_candidate(acc, piece, target, env);
            }
        }
    }
}

fn push_candidate<E>(acc: &mut Vec<String>, piece: &str, target: Target, env: &E)
where
    E: Environment + ?Sized,
{
    if piece.is_empty() {
        return;
    }
    let candidate = match target {
        Target::Directory => expand_tilde(piece, env),
        Target::Suffix => {
            let bare = piece.trim_start_matches('.');
            if bare.is_empty() {
                return;
            }
            format!(".{bare}")
        }
    };
    if candidate.is_empty() || acc.contains(&candidate) {
        return;
    }
    acc.push(candidate);
}
