use crate::core::{JeepModel, LookupObserver, Trim};
use crate::utils::error::InventoryError;

/// Writes lookup events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LookupObserver for TracingObserver {
    fn on_fetch(&self, model: JeepModel, trim: &Trim) {
        tracing::info!(%model, %trim, "fetch_jeeps called");
    }

    fn on_outcome(&self, model: JeepModel, trim: &Trim, outcome: Result<usize, &InventoryError>) {
        match outcome {
            Ok(count) => tracing::debug!(%model, %trim, count, "fetch_jeeps returned"),
            Err(e) if e.is_not_found() => tracing::debug!(%model, %trim, "no matching Jeeps"),
            Err(e) => tracing::warn!(%model, %trim, error = %e, "fetch_jeeps failed"),
        }
    }
}
