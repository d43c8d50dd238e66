//! Чтение коллекций опций для выпадающих списков
//!
//! Each public collection name maps to a table through [`registry`];
//! [`service::list`] answers `GET /api/options/{collection}`.

pub mod registry;
pub mod repository;
pub mod service;

pub use registry::{CollectionRegistry, CollectionSource, RegistryError};
pub use service::OptionsError;
