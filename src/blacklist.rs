//! Blacklist of known-weak passwords
//!
//! The blacklist is an immutable, lowercase-normalized set owned by the
//! caller and handed to the evaluator by reference. Loading it from disk is
//! kept apart from evaluation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the blacklist file.
pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/common_passwords.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// A set of known-weak passwords, stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/common_passwords.txt`
pub fn blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

impl Blacklist {
    /// An empty blacklist; nothing is rejected by it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a blacklist from the plain-text corpus format: one entry per
    /// line, trimmed and case-folded, blank lines ignored.
    pub fn from_lines(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Loads the blacklist from the path named by `PWD_BLACKLIST_PATH`,
    /// falling back to `./assets/common_passwords.txt`.
    ///
    /// # Errors
    ///
    /// See [`Blacklist::from_path`].
    pub fn from_env() -> Result<Self, BlacklistError> {
        Self::from_path(blacklist_path())
    }

    /// Loads the blacklist from a specific file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: file not found {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist = Self::from_lines(&content);

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist loaded: {} passwords from {:?}",
            blacklist.len(),
            path
        );

        Ok(blacklist)
    }

    /// Case-insensitive exact match.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entries are lowercased and otherwise kept as given, the empty string included.
impl<S: AsRef<str>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|entry| entry.as_ref().to_lowercase())
            .collect();
        Blacklist { entries }
    }
}
