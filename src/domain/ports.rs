use crate::domain::model::{Jeep, JeepModel, JeepOrdering, Trim};
use crate::utils::error::{InventoryError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Data-access capability behind a lookup. An empty result is not an error.
#[async_trait]
pub trait JeepQuery: Send + Sync {
    async fn fetch_jeeps(&self, model: JeepModel, trim: &Trim) -> Result<Vec<Jeep>>;
}

/// Observability hook invoked by the lookup service.
pub trait LookupObserver: Send + Sync {
    fn on_fetch(&self, model: JeepModel, trim: &Trim);

    fn on_outcome(&self, _model: JeepModel, _trim: &Trim, _outcome: std::result::Result<usize, &InventoryError>) {}
}

impl<T: LookupObserver + ?Sized> LookupObserver for Arc<T> {
    fn on_fetch(&self, model: JeepModel, trim: &Trim) {
        (**self).on_fetch(model, trim)
    }

    fn on_outcome(&self, model: JeepModel, trim: &Trim, outcome: std::result::Result<usize, &InventoryError>) {
        (**self).on_outcome(model, trim, outcome)
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn catalog_file(&self) -> &str;
    fn ordering(&self) -> JeepOrdering;
}
