use crate::reading::Reading;

/// Messages that drive a mounted gauge.
///
/// Sources:
/// - Sample feed task      → `ReadingArrived`
/// - Config watcher task   → `ConfigReloaded`
/// - Ctrl-C handler        → `Shutdown`
#[derive(Debug, Clone)]
pub enum Message {
    /// A fresh reading from the feed, to be pushed into the window.
    ReadingArrived(Reading),
    /// Config file changed on disk, triggers a live reload.
    ConfigReloaded,
    /// Graceful shutdown requested.
    Shutdown,
}
