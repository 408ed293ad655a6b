pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::catalog::{CsvJeepStore, InMemoryJeepStore};
pub use adapters::storage::LocalStorage;
pub use app::{handle, LookupRequest, Reply};
pub use config::InventoryConfig;
pub use core::observer::TracingObserver;
pub use core::service::InventoryService;
pub use domain::model::{Jeep, JeepModel, JeepOrdering, Trim};
pub use utils::error::{ErrorCategory, InventoryError, Result};
