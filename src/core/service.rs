use crate::core::observer::TracingObserver;
use crate::core::{Jeep, JeepModel, JeepOrdering, JeepQuery, LookupObserver, Trim};
use crate::utils::error::{InventoryError, Result};

/// Looks up Jeeps by model and trim and returns them sorted.
///
/// Holds no mutable state, so one instance can be shared across tasks
/// behind an `Arc`.
pub struct InventoryService<Q: JeepQuery, O: LookupObserver = TracingObserver> {
    query: Q,
    observer: O,
    ordering: JeepOrdering,
}

impl<Q: JeepQuery> InventoryService<Q, TracingObserver> {
    pub fn new(query: Q) -> Self {
        Self::with_observer(query, TracingObserver)
    }
}

impl<Q: JeepQuery, O: LookupObserver> InventoryService<Q, O> {
    pub fn with_observer(query: Q, observer: O) -> Self {
        Self {
            query,
            observer,
            ordering: JeepOrdering::default(),
        }
    }

    pub fn with_ordering(mut self, ordering: JeepOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn ordering(&self) -> JeepOrdering {
        self.ordering
    }

    /// Returns every matching Jeep, sorted by the configured ordering.
    ///
    /// Fails with [`InventoryError::NotFound`] when nothing matches. Internal
    /// errors from the query collaborator are returned as they were raised;
    /// any other kind is wrapped in [`InventoryError::QueryFailed`].
    pub async fn fetch_jeeps(&self, model: JeepModel, trim: &Trim) -> Result<Vec<Jeep>> {
        self.observer.on_fetch(model, trim);

        let result = self.lookup(model, trim).await;
        self.observer
            .on_outcome(model, trim, result.as_ref().map(|jeeps| jeeps.len()));
        result
    }

    async fn lookup(&self, model: JeepModel, trim: &Trim) -> Result<Vec<Jeep>> {
        let mut jeeps = self
            .query
            .fetch_jeeps(model, trim)
            .await
            .map_err(InventoryError::into_internal)?;

        if jeeps.is_empty() {
            return Err(InventoryError::NotFound {
                model,
                trim: trim.to_string(),
            });
        }

        self.ordering.sort(&mut jeeps);
        Ok(jeeps)
    }
}
