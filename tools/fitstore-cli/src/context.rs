//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use fitstore_cache::Cache;
use fitstore_core::Storefront;
use tracing::debug;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Load the config named by `--config`, or search the directory tree.
///
/// Returns the config and the file it came from, if any.
pub fn resolve_config(config_path: Option<&str>) -> Result<(CliConfig, Option<PathBuf>)> {
    if let Some(path) = config_path {
        return Ok((CliConfig::load(path)?, Some(PathBuf::from(path))));
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    match find_config(&cwd) {
        Some(path) => {
            let config = CliConfig::load(&path.to_string_lossy())?;
            Ok((config, Some(path)))
        }
        None => Ok((CliConfig::default(), None)),
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Execution context for CLI commands.
pub struct Context {
    /// File the configuration was loaded from.
    pub config_file: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Directory holding persisted state.
    pub data_dir: PathBuf,
    /// The storefront, opened over `data_dir`.
    pub store: Storefront,
}

impl Context {
    /// Open the storefront over the configured data directory.
    ///
    /// `data_dir` overrides `[storage] data_dir`; relative paths resolve
    /// against the working directory.
    pub fn open(
        config: CliConfig,
        config_file: Option<PathBuf>,
        data_dir: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let data_dir = resolve_path(&cwd, data_dir.unwrap_or(&config.storage.data_dir));

        let cache = Cache::open_dir(&data_dir)
            .with_context(|| format!("Failed to open data directory: {}", data_dir.display()))?;
        let store = Storefront::open(cache, config.store.clone())
            .context("Failed to open storefront")?;
        debug!(data_dir = %data_dir.display(), "context ready");

        Ok(Self {
            config_file,
            output,
            data_dir,
            store,
        })
    }
}

/// Resolve a path relative to the working directory.
pub fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".fitstore.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(".fitstore.toml"));
    }

    #[test]
    fn test_find_config_prefers_first_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fitstore.json"), "{}").unwrap();
        std::fs::write(dir.path().join("fitstore.toml"), "").unwrap();

        assert_eq!(find_config(dir.path()).unwrap(), dir.path().join("fitstore.toml"));
    }

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_path(cwd, "state"), PathBuf::from("/work/state"));
        assert_eq!(resolve_path(cwd, "/var/fitstore"), PathBuf::from("/var/fitstore"));
    }

    #[test]
    fn test_open_persists_between_contexts() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("state");
        let data = data.to_str().unwrap();

        let mut ctx = Context::open(CliConfig::default(), None, Some(data), Output::new(false, true)).unwrap();
        ctx.store.demo_login(fitstore_auth::Role::Seller).unwrap();

        let ctx = Context::open(CliConfig::default(), None, Some(data), Output::new(false, true)).unwrap();
        assert!(ctx.store.is_seller());
    }
}
