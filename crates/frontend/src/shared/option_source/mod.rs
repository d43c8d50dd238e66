//! Источник опций для выпадающих списков
//!
//! [`OptionSource`] is the seam between selector components and the remote
//! store. The app builds one [`HttpOptionSource`] and hands it down through
//! [`OptionSourceContext`]; tests substitute their own implementation.

pub mod error;
pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use contracts::shared::select_option::SelectOption;

pub use error::FetchError;
pub use http::HttpOptionSource;

/// Reads a whole option collection, ordered by `sortKey` ascending
#[async_trait(?Send)]
pub trait OptionSource: Send + Sync {
    async fn fetch_options(&self, collection: &str) -> Result<Vec<SelectOption>, FetchError>;
}

/// Context value carrying the app-wide option source
#[derive(Clone)]
pub struct OptionSourceContext(pub Arc<dyn OptionSource>);

impl OptionSourceContext {
    pub fn new(source: impl OptionSource + 'static) -> Self {
        Self(Arc::new(source))
    }
}
