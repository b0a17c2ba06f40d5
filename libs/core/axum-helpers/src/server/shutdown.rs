//! Signal handling and shutdown coordination.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::info;

/// Fans a single shutdown decision out to every interested task.
///
/// The coordinator owns a broadcast channel plus a latched flag, so a
/// task can either await the notification or poll the state. Cloning
/// shares the same underlying channel.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> (Self, broadcast::Receiver<()>) {
        let (tx, rx) = broadcast::channel(1);
        let coordinator = Self {
            tx,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        };
        (coordinator, rx)
    }

    /// New receiver on the shutdown channel.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_initiated.load(Ordering::Relaxed)
    }

    /// Latch the flag and notify subscribers. Only the first call sends.
    pub fn shutdown(&self) {
        let first = self
            .shutdown_initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();

        if first {
            info!("Initiating graceful shutdown");
            let _ = self.tx.send(());
        }
    }

    /// Block until SIGINT or SIGTERM arrives, then trigger [`shutdown`].
    ///
    /// [`shutdown`]: Self::shutdown
    pub async fn wait_for_signal(&self) {
        match os_signal().await {
            Signal::Interrupt => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Signal::Terminate => info!("Received SIGTERM, initiating graceful shutdown"),
        }

        self.shutdown();
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new().0
    }
}

enum Signal {
    Interrupt,
    Terminate,
}

async fn os_signal() -> Signal {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => Signal::Interrupt,
        _ = terminate => Signal::Terminate,
    }
}

/// Bare signal wait for `axum::serve().with_graceful_shutdown()`.
///
/// No cleanup coordination or timeout; `create_production_app` with a
/// [`ShutdownCoordinator`] is the production path.
pub async fn shutdown_signal() {
    match os_signal().await {
        Signal::Interrupt => info!("Received Ctrl+C signal, shutting down gracefully"),
        Signal::Terminate => info!("Received SIGTERM signal, shutting down gracefully"),
    }
}

/// Shutdown future for `create_production_app`.
pub(crate) async fn coordinated_shutdown(coordinator: ShutdownCoordinator) {
    coordinator.wait_for_signal().await;
}
