//! Periodic stand-in for an external sensor feed.
//!
//! [`spawn_feed`] starts a Tokio task that produces one reading per tick and
//! waits for the consumer to [`FeedTick::complete`] it before the next tick
//! may begin, so window mutation and rendering are strictly serialised.
//! The returned [`FeedHandle`] cancels the task; dropping it does too.

pub mod generator;

pub use generator::ReadingGenerator;

use meter_config::FeedConfig;
use meter_core::{MeterError, Reading, Result};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info};

/// One reading delivered by the feed.
#[derive(Debug)]
pub struct FeedTick {
    pub reading: Reading,
    ack:         oneshot::Sender<()>,
}

impl FeedTick {
    /// Signal that the reading has been pushed and rendered.
    ///
    /// Dropping the tick without calling this has the same effect.
    pub fn complete(self) {
        let _ = self.ack.send(());
    }
}

/// Owner of a running feed task.
#[derive(Debug)]
pub struct FeedHandle {
    cancel: CancellationToken,
    task:   JoinHandle<()>,
    _guard: DropGuard,
}

impl FeedHandle {
    /// Cancel the feed and wait until the task has exited.
    ///
    /// After this returns no further readings will be produced.
    pub async fn stop(self) -> Result<()> {
        self.cancel.cancel();
        self.task
            .await
            .map_err(|e| MeterError::Feed(format!("feed task failed to join: {e}")))
    }
}

/// Spawn the feed task described by `config`.
///
/// The task stops when the handle is stopped or dropped, or when the
/// receiver is dropped.  Must be called from within a Tokio runtime.
pub fn spawn_feed(config: &FeedConfig) -> (FeedHandle, mpsc::Receiver<FeedTick>) {
    let (tx, rx) = mpsc::channel(1);
    let cancel = CancellationToken::new();
    let period = Duration::from_millis(config.interval_ms);
    let generator = ReadingGenerator::new(config);

    info!(interval_ms = config.interval_ms, "starting sample feed");
    let task = tokio::spawn(feed_loop(generator, period, tx, cancel.clone()));

    let handle = FeedHandle {
        _guard: cancel.clone().drop_guard(),
        cancel,
        task,
    };
    (handle, rx)
}

async fn feed_loop(
    mut generator: ReadingGenerator,
    period: Duration,
    tx: mpsc::Sender<FeedTick>,
    cancel: CancellationToken,
) {
    // First reading after one full period, like a plain repeating timer.
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let reading = generator.next_reading(chrono::Utc::now().timestamp_millis());
        let (ack, done) = oneshot::channel();
        debug!(value = reading.value, timestamp = reading.timestamp, "feed tick");

        tokio::select! {
            _ = cancel.cancelled() => break,
            sent = tx.send(FeedTick { reading, ack }) => {
                if sent.is_err() {
                    break; // receiver dropped
                }
            }
        }

        // Either outcome means the consumer is finished with this tick.
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = done => {}
        }
    }

    info!("sample feed stopped");
}
