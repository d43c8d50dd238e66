use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::shared::select_option::SelectOption;

use crate::routes::AppState;
use crate::shared::options::{service, OptionsError};

/// GET /api/options/:collection
pub async fn list(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<SelectOption>>, StatusCode> {
    match service::list(&state.db, &state.registry, &collection).await {
        Ok(v) => Ok(Json(v)),
        Err(OptionsError::UnknownCollection(name)) => {
            tracing::warn!("Requested unknown option collection '{}'", name);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("Failed to list options for '{}': {}", collection, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use crate::shared::options::CollectionRegistry;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unknown_collection_is_not_found() {
        let state = AppState {
            db: connect_in_memory().await.unwrap(),
            registry: Arc::new(CollectionRegistry::default()),
        };
        let result = list(State(state), Path("venue".to_string())).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }
}
