//! Interaction-state core of the administration console shell.
//!
//! This crate owns every piece of shell state that reacts to user
//! interactions: the exclusive sidebar dropdown group, the independent
//! search/notifications/profile panels with their outside-interaction
//! dismissal pass, the notification read/unread lifecycle, active-link
//! highlighting, and the responsive mobile-sidebar flag. Rendering and page
//! content are external collaborators; they read the [`Shell`] state and
//! feed raw interaction events back into it.
//!
//! The backend supplies configuration and the notification feed over the
//! bridge channels; [`run`] pumps those messages into the shell until the
//! bridge closes.

pub mod geometry;
pub mod navigation;
pub mod notifications;
pub mod overlay;
mod shell;

pub use shell::Shell;

use campus_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc;

use crate::navigation::MemoryRouter;

/// Handle for issuing shell-side requests to the backend bridge.
#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    pub fn request_config(&self) -> anyhow::Result<()> {
        self.to_backend
            .blocking_send(MessageToBackend::ConfigurationRequest)?;
        Ok(())
    }

    pub fn request_notifications(&self) -> anyhow::Result<()> {
        self.to_backend
            .blocking_send(MessageToBackend::NotificationsRequest)?;
        Ok(())
    }
}

/// Runs the shell message pump until the backend closes the bridge.
///
/// Builds a [`Shell`] around an in-memory router, requests the configuration
/// and the notification feed, and applies every backend response to the
/// shell state. A rendering layer embeds the same state types directly and
/// drives interaction events against [`Shell`].
pub fn run(
    mut rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let mut shell = Shell::new(MemoryRouter::default());

    let bridge = BackendBridge { to_backend: tx };
    bridge.request_config()?;
    bridge.request_notifications()?;

    while let Some(message) = rx.blocking_recv() {
        log::debug!("Got a backend message: {message:?}");
        shell.apply_backend_message(message);
        log::info!(
            "Shell state updated; {} unread notification(s)",
            shell.unread_count()
        );
    }

    Ok(())
}
