//! Communication bridge between the console shell and the backend.
//!
//! This crate defines the types and protocols used to connect the
//! interaction-state shell of the administration console with an
//! asynchronous backend responsible for configuration and the notification
//! feed.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The shell sends commands (e.g., request configuration, request the
//!   notification feed).
//! - The backend pushes responses (e.g., the loaded configuration, a
//!   snapshot of notifications).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod config;
pub mod notification;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the shell of state updates.
///
/// These are sent in response to shell requests; the shell applies them to
/// its local state and renders from it.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Response to the configuration request from the shell.
    ConfigurationResponse(config::Config),
    /// The current notification feed, in insertion order. The shell replaces
    /// its notification state wholesale with this snapshot.
    NotificationsSnapshot(Vec<notification::Notification>),
}

/// Commands issued by the shell to query the backend.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request for the current notification feed.
    NotificationsRequest,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// the shell and the backend.
pub struct BridgeChannels {
    /// Receiver used by the shell to get messages from the backend.
    pub shell_rx: Receiver<MessageFromBackend>,
    /// Sender used by the shell to send commands to the backend.
    pub shell_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the shell.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send responses to the shell.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_shell_tx, to_shell_rx) = mpsc::channel(buffer);
        Self {
            shell_tx: to_backend_tx,
            shell_rx: to_shell_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_shell_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
