//! Lifecycle of a mounted gauge.
//!
//! Owns the run loop and wires together all background tasks:
//! - Sample feed (one reading per tick, acknowledged after each render)
//! - Config file watcher (live reload on change)
//! - Ctrl-C (graceful shutdown: the feed is cancelled before the window goes)

pub mod session;

pub use session::GaugeSession;

use meter_config::{load as load_config, ConfigWatcher};
use meter_core::{Message, Result};
use meter_feed::{spawn_feed, FeedHandle, FeedTick};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Mount the gauge described by `config_path` and drive it until Ctrl-C.
pub async fn run(config_path: PathBuf) -> Result<()> {
    run_until(config_path, tokio::signal::ctrl_c()).await
}

/// Like [`run`], but stops when `shutdown` resolves.
pub async fn run_until<F: Future>(config_path: PathBuf, shutdown: F) -> Result<()> {
    let config = load_config(&config_path)?;
    let mut session = GaugeSession::mount(config)?;
    write_outputs(&session).await;

    let (mut feed, mut ticks) = spawn_feed(&session.config().feed);
    let (_watcher, mut reloads) = ConfigWatcher::spawn(&config_path);
    let mut watching = true;
    tokio::pin!(shutdown);

    loop {
        let (message, tick) = tokio::select! {
            tick = ticks.recv() => match tick {
                Some(tick) => (Message::ReadingArrived(tick.reading), Some(tick)),
                None => {
                    warn!("Sample feed ended unexpectedly");
                    (Message::Shutdown, None)
                }
            },
            changed = reloads.recv(), if watching => match changed {
                Some(()) => (Message::ConfigReloaded, None),
                None => {
                    watching = false; // watcher gave up; keep running without it
                    continue;
                }
            },
            _ = &mut shutdown => {
                info!("shutdown requested");
                (Message::Shutdown, None)
            }
        };

        match message {
            Message::ReadingArrived(reading) => {
                if session.ingest(reading).is_ok() {
                    write_outputs(&session).await;
                }
                // Only now may the feed start its next tick.
                if let Some(tick) = tick {
                    tick.complete();
                }
            }
            Message::ConfigReloaded => {
                if let Some(restarted) = reload(&mut session, &config_path).await {
                    feed.stop().await?;
                    (feed, ticks) = restarted;
                }
            }
            Message::Shutdown => break,
        }
    }

    feed.stop().await?;
    info!("gauge unmounted");
    Ok(())
}

/// Re-read the config and apply it.  Returns a fresh feed when the feed
/// settings changed so the caller can swap it in.
///
/// Readings already in the window are kept; `data` only seeds a new mount.
async fn reload(
    session: &mut GaugeSession,
    path: &Path,
) -> Option<(FeedHandle, mpsc::Receiver<FeedTick>)> {
    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Config reload failed: {e}");
            return None;
        }
    };

    let feed_changed = config.feed != session.config().feed;
    if let Err(e) = session.reconfigure(config) {
        warn!("Config reload rejected: {e}");
        return None;
    }
    info!("Config reloaded");
    write_outputs(session).await;

    feed_changed.then(|| spawn_feed(&session.config().feed))
}

async fn write_outputs(session: &GaugeSession) {
    if let Err(e) = session.write_outputs().await {
        warn!("{e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meter_config::{FeedConfig, MeterConfig, WindowConfig};

    #[tokio::test]
    async fn feed_drives_session() {
        let config = MeterConfig {
            feed: FeedConfig {
                interval_ms: 5,
                min_value: 40.0,
                max_value: 50.0,
                seed: Some(11),
            },
            window: WindowConfig { capacity: 4 },
            ..MeterConfig::default()
        };
        // Seed sequence stamped in the past so live readings are newer.
        let mut session = GaugeSession::mount_at(config, 0).unwrap();
        let (feed, mut ticks) = spawn_feed(&session.config().feed);

        for _ in 0..5 {
            let tick = ticks.recv().await.unwrap();
            session.ingest(tick.reading).unwrap();
            tick.complete();
        }
        feed.stop().await.unwrap();

        assert_eq!(session.window().len(), 4);
        assert!(session.window().iter().all(|r| (40.0..50.0).contains(&r.value)));
        let view = session.view();
        assert_eq!(view.aggregate.sample_count, 4);
        assert!(view.aggregate.percentage > 0.19 && view.aggregate.percentage < 0.25);
    }

    #[tokio::test]
    async fn run_stops_once_shutdown_resolves() {
        let dir = std::env::temp_dir().join(format!("meter-run-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("meter.toml");
        let json = dir.join("view.json");
        std::fs::write(
            &path,
            format!(
                "[feed]\ninterval_ms = 5\nseed = 3\n\n[output]\njson_path = {:?}\n",
                json.display().to_string()
            ),
        )
        .unwrap();

        let limit = std::time::Duration::from_secs(5);
        let ran = tokio::time::timeout(
            limit,
            run_until(path.clone(), tokio::time::sleep(std::time::Duration::from_millis(50))),
        )
        .await;
        assert!(matches!(ran, Ok(Ok(()))));
        let view: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert!(view["aggregate"]["sample_count"].as_u64().unwrap() >= 6);

        // A signal that is already pending ends the loop on the first poll.
        let ran = tokio::time::timeout(limit, run_until(path, std::future::ready(()))).await;
        assert!(matches!(ran, Ok(Ok(()))));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn reload_swaps_config_and_restarts_feed_on_change() {
        let dir = std::env::temp_dir().join(format!("meter-reload-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("meter.toml");

        let mut session = GaugeSession::mount_at(MeterConfig::default(), 0).unwrap();

        std::fs::write(&path, "[gauge]\ntitle = \"Boiler\"\n").unwrap();
        assert!(reload(&mut session, &path).await.is_none());
        assert_eq!(session.view().title, "Boiler");

        std::fs::write(&path, "[feed]\ninterval_ms = 500\n").unwrap();
        let (feed, _ticks) = reload(&mut session, &path).await.unwrap();
        assert_eq!(session.config().feed.interval_ms, 500);
        feed.stop().await.unwrap();

        std::fs::write(&path, "[gauge]\nmax_value = 0.0\n").unwrap();
        assert!(reload(&mut session, &path).await.is_none());
        assert_eq!(session.config().feed.interval_ms, 500);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
