//! Hot reload of the bail-out config file.
//!
//! Reloaded values go straight into a [`ConfigStore`], so the next failure
//! event reads them. A file that fails to parse or validate leaves the stored
//! config untouched.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::load_config;
use crate::config::store::ConfigStore;
use crate::error::ConfigError;

/// Poll interval for platforms without native file events.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Keeps a [`ConfigStore`] in sync with a config file.
pub struct ConfigWatcher {
    path: PathBuf,
    store: ConfigStore,
}

impl ConfigWatcher {
    pub fn new(path: &Path, store: ConfigStore) -> Self {
        Self {
            path: path.to_path_buf(),
            store,
        }
    }

    /// Re-read the file into the store.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = load_config(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            is_enabled = config.is_enabled,
            fail_effect_duration_secs = config.fail_effect_duration_secs,
            "Bail-out config reloaded"
        );
        self.store.replace(config);
        Ok(())
    }

    /// Watch the file in a background thread.
    ///
    /// Reloading stops when the returned watcher is dropped.
    pub fn watch(self, poll_interval: Duration) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    tracing::debug!(kind = ?event.kind, "Config file changed");
                    if let Err(e) = self.reload() {
                        tracing::error!(error = %e, "Config reload failed, keeping current config");
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "Config watch error"),
            },
            Config::default().with_poll_interval(poll_interval),
        )?;
        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %path.display(), "Config watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BailOutConfig;
    use std::fs;
    use std::time::Instant;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_reload_replaces_store() {
        let file = config_file("fail_effect_duration_secs = 4.0\n");
        let store = ConfigStore::default();
        let watcher = ConfigWatcher::new(file.path(), store.clone());

        watcher.reload().unwrap();
        assert_eq!(store.current().fail_effect_duration_secs, 4.0);

        fs::write(file.path(), "is_enabled = false\n").unwrap();
        watcher.reload().unwrap();
        assert!(!store.current().is_enabled);
        assert_eq!(store.current().fail_effect_duration_secs, 3.0);
    }

    #[test]
    fn test_invalid_file_keeps_current_config() {
        let file = config_file("counter_text_size = 30.0\n");
        let store = ConfigStore::default();
        let watcher = ConfigWatcher::new(file.path(), store.clone());
        watcher.reload().unwrap();

        fs::write(file.path(), "counter_text_size = -1.0\n").unwrap();
        assert!(matches!(watcher.reload(), Err(ConfigError::Validation(_))));

        fs::write(file.path(), "counter_text_size = \"big\"\n").unwrap();
        assert!(matches!(watcher.reload(), Err(ConfigError::Parse(_))));

        assert_eq!(store.current().counter_text_size, 30.0);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let watcher = ConfigWatcher::new(&dir.path().join("gone.toml"), ConfigStore::default());
        assert!(matches!(watcher.reload(), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_file_change_reaches_store() {
        let file = config_file("");
        let store = ConfigStore::new(BailOutConfig::default());
        let _watcher = ConfigWatcher::new(file.path(), store.clone())
            .watch(Duration::from_millis(50))
            .unwrap();

        fs::write(file.path(), "last_standing_interval_secs = 9.0\n").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while store.current().last_standing_interval_secs != 9.0 {
            assert!(Instant::now() < deadline, "reload never reached the store");
            std::thread::sleep(Duration::from_millis(20));
        }
    }
}
