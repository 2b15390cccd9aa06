//! Hot-reload support: watches the settings file for changes.

use crate::error::Result;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::debug;

pub use crate::settings::default_settings_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Watch `path`. The parent directory is watched so that editors which
    /// replace the file on save are still seen.
    pub fn new(path: PathBuf) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |event: notify::Result<Event>| {
            let _ = tx.send(event);
        })?;

        let target = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        watcher.watch(target, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "watching settings");

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next event concerning the settings file, if one is queued.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(mapped) = self.classify(&event) {
                        return Some(mapped);
                    }
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    return Some(SettingsEvent::Error("watcher disconnected".to_string()));
                }
            }
        }
    }

    fn classify(&self, event: &Event) -> Option<SettingsEvent> {
        let file_name = self.path.file_name()?;
        if !event.paths.iter().any(|p| p.file_name() == Some(file_name)) {
            return None;
        }
        match event.kind {
            EventKind::Create(_) => Some(SettingsEvent::Created),
            EventKind::Modify(_) => Some(SettingsEvent::Modified),
            EventKind::Remove(_) => Some(SettingsEvent::Deleted),
            _ => None,
        }
    }
}
