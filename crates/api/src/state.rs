use std::sync::Arc;

use cbprep_notify::Mailer;

use crate::config::{NotifyConfig, ServerConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Nothing in it is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Sender and owner addresses for notifications.
    pub notify: Arc<NotifyConfig>,
    /// Email provider. `None` when no API key was configured.
    pub mailer: Option<Arc<dyn Mailer>>,
}
