use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::{self, CubebitConfig};

/// Signals a change to the config file. Keep it alive for as long as events are wanted.
pub struct ConfigWatcher {
    path: PathBuf,
    rx: Receiver<()>,
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    pub fn new(path: &Path) -> notify::Result<Self> {
        let (tx, rx) = channel::<()>();
        let mut watcher =
            notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    match event.kind {
                        EventKind::Modify(_)
                        | EventKind::Create(_)
                        | EventKind::Remove(_)
                        | EventKind::Any => {
                            let _ = tx.send(());
                        }
                        _ => {}
                    }
                }
            })?;
        watcher.watch(path, RecursiveMode::NonRecursive)?;
        log::info!("watching {} for changes", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            rx,
            _watcher: watcher,
        })
    }

    /// Reload the file if it changed since the last poll. A failed reload is logged and
    /// reported as `None` so the caller keeps what it has.
    pub fn poll(&self) -> Option<CubebitConfig> {
        if self.rx.try_iter().count() == 0 {
            return None;
        }
        if !self.path.exists() {
            log::warn!("config missing: {}", self.path.display());
            return None;
        }
        match config::load_from_path(&self.path) {
            Ok(cfg) => {
                log::info!("config reloaded from {}", self.path.display());
                Some(cfg)
            }
            Err(e) => {
                log::warn!("config reload failed: {}", e);
                None
            }
        }
    }
}
