use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::state::Collection;
use crate::shared::option_source::{FetchError, OptionSource};

/// Cancelled when the owning component is torn down
#[derive(Clone, Debug, Default)]
pub struct LifetimeToken(Arc<AtomicBool>);

impl LifetimeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied(Result<Collection, FetchError>),
    /// The requester was gone before the result arrived
    Discarded,
}

/// One read of `collection`. The result is only handed back while `token` is live.
pub async fn load_collection(
    source: &dyn OptionSource,
    collection: &str,
    token: &LifetimeToken,
) -> LoadOutcome {
    if token.is_cancelled() {
        return LoadOutcome::Discarded;
    }

    let result = source.fetch_options(collection).await.map(Collection::new);

    if token.is_cancelled() {
        log::debug!(
            "Options for '{}' arrived after the selector was unmounted, dropping",
            collection
        );
        return LoadOutcome::Discarded;
    }

    match &result {
        Ok(loaded) => log::debug!("Loaded {} options for '{}'", loaded.len(), collection),
        Err(e) => log::warn!(
            "Failed to load options for '{}', keeping previous list: {}",
            collection,
            e
        ),
    }
    LoadOutcome::Applied(result)
}
