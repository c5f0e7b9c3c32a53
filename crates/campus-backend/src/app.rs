//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses back to the shell bridge.

use std::sync::Arc;

use campus_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the shell bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the shell bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a shell message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from the shell down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ConfigurationRequest => {
                services::config_service::handle_config_request(self.clone()).await;
            }
            MessageToBackend::NotificationsRequest => {
                services::notification_service::handle_notifications_request(self.clone()).await;
            }
        }
    }

    /// Send a message to the shell bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        self.tx
            .send(message)
            .await
            .expect("failed to send message to the shell");
    }
}
