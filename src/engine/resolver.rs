//! Directory-token resolution: `~TOKEN` and `$TOKEN` environment references,
//! home shorthand, and canonicalization to an absolute path.

use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Environment variable consulted when a `~TOKEN` reference does not name a
/// set variable.
pub const FALLBACK_VAR: &str = "DEVELOPMENT";

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("environment variable '{0}' is not set and no fallback root is available")]
    UnresolvedReference(String),
    #[error("failed to canonicalize '{path}': {source}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Expands raw directory tokens into absolute, canonicalized paths.
///
/// The environment lookup is injected so tests can run against a fake
/// environment; production code uses [`Resolver::from_process_env`].
pub struct Resolver<F = fn(&str) -> Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    env: F,
    fallback_root: Option<PathBuf>,
}

fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

impl Resolver {
    /// Resolver backed by the process environment. The fallback root is
    /// `$DEVELOPMENT` when set, else `~/Documents/code_projects/development`.
    pub fn from_process_env() -> Self {
        let fallback = process_env(FALLBACK_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                dirs::home_dir()
                    .map(|home| home.join("Documents").join("code_projects").join("development"))
            });
        Resolver {
            env: process_env,
            fallback_root: fallback,
        }
    }
}

impl<F> Resolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(env: F, fallback_root: Option<PathBuf>) -> Self {
        Self { env, fallback_root }
    }

    /// Maps a raw directory token to an absolute path. Rules, in order:
    /// `~NAME` expands to the value of `NAME`, else the fallback root;
    /// `$NAME` expands to the value of `NAME`, else `NAME` as a literal
    /// path; anything else is a plain path with bare `~` home shorthand.
    /// The result is canonicalized but not checked for existence.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, ResolveError> {
        if let Some(var) = raw.strip_prefix('~').filter(|rest| !rest.is_empty()) {
            // Empty values count as unset.
            if let Some(value) = self.lookup(var) {
                return canonicalize_lenient(Path::new(&value));
            }
            let fallback = self
                .fallback_root
                .as_deref()
                .ok_or_else(|| ResolveError::UnresolvedReference(var.to_string()))?;
            return canonicalize_lenient(fallback);
        }

        if let Some(var) = raw.strip_prefix('$').filter(|rest| !rest.is_empty()) {
            if let Some(value) = self.lookup(var) {
                return canonicalize_lenient(Path::new(&value));
            }
            // Unset: degrade to the token itself as a literal path segment.
            return canonicalize_lenient(Path::new(var));
        }

        let expanded = if raw == "~" {
            dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"))
        } else {
            PathBuf::from(raw)
        };
        canonicalize_lenient(&expanded)
    }

    fn lookup(&self, var: &str) -> Option<String> {
        (self.env)(var).filter(|v| !v.is_empty())
    }
}

/// Canonicalizes a path without requiring it to exist: the nearest existing
/// ancestor is resolved through `fs::canonicalize` and the remaining
/// components are re-appended.
fn canonicalize_lenient(path: &Path) -> Result<PathBuf, ResolveError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|source| ResolveError::Canonicalize {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };

    if let Ok(canonical) = absolute.canonicalize() {
        return Ok(canonical);
    }

    let mut cursor = absolute.clone();
    let mut tail: Vec<OsString> = Vec::new();
    while !cursor.exists() {
        let Some(name) = cursor.file_name() else {
            // A trailing `..` component; fall back to lexical cleanup.
            return Ok(normalize_lexically(&absolute));
        };
        tail.push(name.to_os_string());
        let Some(parent) = cursor.parent() else {
            return Ok(normalize_lexically(&absolute));
        };
        cursor = parent.to_path_buf();
    }

    let mut canonical = cursor
        .canonicalize()
        .map_err(|source| ResolveError::Canonicalize {
            path: cursor.clone(),
            source,
        })?;
    for segment in tail.iter().rev() {
        canonical.push(segment);
    }
    Ok(canonical)
}

/// Drops `.` components and resolves `..` textually.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
