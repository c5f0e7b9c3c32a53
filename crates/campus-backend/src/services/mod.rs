//! Backend service handlers for shell-driven requests.
//!
//! This module groups async request handlers that operate on the shared
//! `AppContext`, perform side effects (network), and emit responses back to
//! the shell bridge.

pub mod config_service;
pub mod notification_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::AppContext>;
