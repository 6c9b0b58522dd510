use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Quiet period after the last change before a reload is signalled.
/// Editors often write a file several times (truncate, write, rename) per save.
pub const SETTLE: Duration = Duration::from_millis(150);

/// Watches the gauge config file and signals once per save.
///
/// The parent directory is watched rather than the file itself, so a file
/// replaced by rename (or created after startup) is still picked up.
/// Dropping the watcher stops it and closes the receiver.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use meter_config::ConfigWatcher;
///
/// let (_watcher, mut rx) = ConfigWatcher::spawn("/home/user/.config/meter/meter.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    task: JoinHandle<()>,
}

impl ConfigWatcher {
    /// Spawn a watcher for `path`.  Must be called from within a Tokio runtime.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let task = tokio::spawn(watch_loop(path.as_ref().to_path_buf(), tx));
        (Self { task }, rx)
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// `true` when `event` may have changed the file named `file_name`.
fn touches(event: &Event, file_name: &OsStr) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event.paths.iter().any(|p| p.file_name() == Some(file_name))
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    let Some(file_name) = path.file_name().map(OsStr::to_os_string) else {
        warn!("Not watching '{}': no file name", path.display());
        return;
    };
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);
    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        // No config directory: the gauge keeps running on what it loaded.
        warn!("Not watching '{}': {e}", dir.display());
        return;
    }
    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(event) if touches(&event, &file_name) => {
                tokio::time::sleep(SETTLE).await;
                let mut burst = 1;
                while event_rx.try_recv().is_ok() {
                    burst += 1;
                }
                debug!(events = burst, "config file changed");
                if tx.send(()).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
