use contracts::shared::select_option::SelectOption;
use sea_orm::{DatabaseConnection, DbErr};

use super::registry::CollectionRegistry;
use super::repository;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Опции коллекции `name`, если она объявлена в конфигурации
pub async fn list(
    conn: &DatabaseConnection,
    registry: &CollectionRegistry,
    name: &str,
) -> Result<Vec<SelectOption>, OptionsError> {
    let source = registry
        .get(name)
        .ok_or_else(|| OptionsError::UnknownCollection(name.to_string()))?;
    let options = repository::list_options(conn, source).await?;
    tracing::debug!("Collection '{}': {} options", name, options.len());
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use crate::shared::data::db::connect_in_memory;

    #[tokio::test]
    async fn test_unknown_collection() {
        let conn = connect_in_memory().await.unwrap();
        let registry = CollectionRegistry::default();

        let err = list(&conn, &registry, "venue").await.unwrap_err();
        assert!(matches!(err, OptionsError::UnknownCollection(name) if name == "venue"));
    }

    #[tokio::test]
    async fn test_configured_collection_reads_table() {
        let conn = connect_in_memory().await.unwrap();
        let config = parse_config(
            r#"
            [database]
            path = "unused.db"

            [[collections]]
            name = "venue"
            table = "a001_venue"
            id_column = "id"
            label_column = "name"
            "#,
        )
        .unwrap();
        let registry = CollectionRegistry::from_config(&config.collections).unwrap();

        let options = list(&conn, &registry, "venue").await.unwrap();
        assert!(options.is_empty());
    }
}
