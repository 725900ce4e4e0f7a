use std::sync::Arc;

use crate::backend::DocumentBackend;

/// Send an audit record to the backend's log sink, fire-and-forget. A
/// failure here must never roll back or block the action that succeeded, so
/// it is only ever logged locally.
pub fn record(backend: Arc<dyn DocumentBackend>, action: String) {
    tokio::spawn(async move {
        if let Err(e) = backend.record_log(&action).await {
            log::warn!("audit record dropped ({action}): {e}");
        }
    });
}
