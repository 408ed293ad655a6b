pub mod observer;
pub mod service;

pub use crate::domain::model::{Jeep, JeepModel, JeepOrdering, Trim};
pub use crate::domain::ports::{ConfigProvider, JeepQuery, LookupObserver, Storage};
pub use crate::utils::error::Result;
