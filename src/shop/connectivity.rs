//! Network reachability tracking.
//!
//! A subscription polls a [`ReachabilityProbe`] and forwards every reading
//! to the event loop as [`AppEvent::Reachability`]. The loop feeds readings
//! into a [`ConnectivityWatcher`], which collapses duplicates and asks for a
//! reload on each offline-to-online transition.

use crate::app::event::AppEvent;
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// What a reachability reading changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    WentOffline,
    /// Became reachable; the collection should be reloaded.
    CameOnline,
}

impl Transition {
    pub fn needs_reload(self) -> bool {
        self == Transition::CameOnline
    }
}

/// Last known reachability. Starts offline.
#[derive(Debug, Default)]
pub struct ConnectivityWatcher {
    is_connected: bool,
}

impl ConnectivityWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn observe(&mut self, is_connected: bool) -> Transition {
        if is_connected == self.is_connected {
            return Transition::Unchanged;
        }
        self.is_connected = is_connected;
        if is_connected {
            info!("network reachable");
            Transition::CameOnline
        } else {
            info!("network unreachable");
            Transition::WentOffline
        }
    }
}

#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn is_reachable(&self) -> bool;
}

/// Considers the network reachable when a TCP connection to `host:port`
/// completes within `timeout`.
pub struct TcpProbe {
    addr: String,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: &str, port: u16, timeout: Duration) -> Self {
        Self {
            addr: format!("{}:{}", host, port),
            timeout,
        }
    }
}

#[async_trait]
impl ReachabilityProbe for TcpProbe {
    async fn is_reachable(&self) -> bool {
        match tokio::time::timeout(self.timeout, TcpStream::connect(&self.addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(addr = %self.addr, "reachability probe failed: {}", e);
                false
            }
            Err(_) => {
                debug!(addr = %self.addr, "reachability probe timed out");
                false
            }
        }
    }
}

/// Always reports the same reading.
pub struct StaticProbe(pub bool);

#[async_trait]
impl ReachabilityProbe for StaticProbe {
    async fn is_reachable(&self) -> bool {
        self.0
    }
}

/// Live reachability listener. Dropping it unsubscribes.
pub struct ConnectivitySubscription {
    task: JoinHandle<()>,
}

impl Drop for ConnectivitySubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Poll `probe` every `interval`, starting immediately, and send each
/// reading to `event_tx`.
pub fn subscribe(
    probe: impl ReachabilityProbe + 'static,
    interval: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> ConnectivitySubscription {
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let is_connected = probe.is_reachable().await;
            if event_tx.send(AppEvent::Reachability { is_connected }).is_err() {
                break;
            }
        }
    });
    ConnectivitySubscription { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn offline_to_online_requests_one_reload() {
        let mut watcher = ConnectivityWatcher::new();
        assert!(!watcher.is_connected());
        assert_eq!(watcher.observe(true), Transition::CameOnline);
        assert!(watcher.is_connected());
        assert_eq!(watcher.observe(true), Transition::Unchanged);
        assert_eq!(watcher.observe(true), Transition::Unchanged);
    }

    #[test]
    fn going_offline_never_reloads() {
        let mut watcher = ConnectivityWatcher::new();
        assert_eq!(watcher.observe(false), Transition::Unchanged);
        watcher.observe(true);
        let t = watcher.observe(false);
        assert_eq!(t, Transition::WentOffline);
        assert!(!t.needs_reload());
        assert!(watcher.observe(true).needs_reload());
    }

    struct FlagProbe(Arc<AtomicBool>);

    #[async_trait]
    impl ReachabilityProbe for FlagProbe {
        async fn is_reachable(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn subscription_forwards_every_reading() {
        let flag = Arc::new(AtomicBool::new(false));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _sub = subscribe(FlagProbe(flag.clone()), Duration::from_secs(1), tx);

        let mut readings = Vec::new();
        for step in 0..3 {
            match rx.recv().await {
                Some(AppEvent::Reachability { is_connected }) => readings.push(is_connected),
                other => panic!("unexpected event: {:?}", other),
            }
            if step == 0 {
                flag.store(true, Ordering::SeqCst);
            }
        }
        assert_eq!(readings, [false, true, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_subscription_stops_polling() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sub = subscribe(StaticProbe(true), Duration::from_millis(100), tx);
        assert!(matches!(
            rx.recv().await,
            Some(AppEvent::Reachability { is_connected: true })
        ));
        drop(sub);
        // The aborted task drops its sender, closing the channel
        let drained = tokio::time::timeout(Duration::from_secs(5), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }

    #[tokio::test]
    async fn tcp_probe_detects_listener() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let probe = TcpProbe::new("127.0.0.1", port, Duration::from_secs(1));
        assert!(probe.is_reachable().await);

        drop(listener);
        let probe = TcpProbe::new("127.0.0.1", port, Duration::from_secs(1));
        assert!(!probe.is_reachable().await);
    }
}
