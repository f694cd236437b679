//! Runtime configuration resolved from the environment.

use std::path::{Path, PathBuf};

use crate::allocator::DEFAULT_RETRY_BUDGET;

/// Environment variable naming the store directory.
pub const STORE_ENV: &str = "BARSHEET_STORE";
/// Environment variable overriding the allocator retry budget.
pub const RETRY_BUDGET_ENV: &str = "BARSHEET_RETRY_BUDGET";
/// Store directory used when nothing else is configured.
pub const DEFAULT_STORE_DIR: &str = ".barsheet";

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the persisted lists.
    pub store_root: PathBuf,
    /// Maximum id draws per allocation.
    pub retry_budget: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self { store_root: PathBuf::from(DEFAULT_STORE_DIR), retry_budget: DEFAULT_RETRY_BUDGET }
    }
}

impl Config {
    /// Reads configuration from the process environment, after loading `.env`
    /// if one exists.
    #[must_use]
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "ignoring unreadable .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(root) = lookup(STORE_ENV).filter(|v| !v.trim().is_empty()) {
            config.store_root = PathBuf::from(root);
        }
        if let Some(raw) = lookup(RETRY_BUDGET_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(budget) if budget > 0 => config.retry_budget = budget,
                _ => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_RETRY_BUDGET,
                    "invalid {RETRY_BUDGET_ENV}, using default"
                ),
            }
        }
        config
    }

    /// Applies a `--store` flag, which wins over the environment.
    #[must_use]
    pub fn with_store_override(mut self, store: Option<&Path>) -> Self {
        if let Some(root) = store {
            self.store_root = root.to_path_buf();
        }
        self
    }
}
