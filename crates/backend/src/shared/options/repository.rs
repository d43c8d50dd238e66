use contracts::shared::select_option::SelectOption;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};

use super::registry::CollectionSource;

/// All rows of the collection as options, ordered by sort key ascending
pub async fn list_options(
    conn: &DatabaseConnection,
    source: &CollectionSource,
) -> Result<Vec<SelectOption>, DbErr> {
    let rows = conn
        .query_all(Statement::from_string(
            conn.get_database_backend(),
            source.select_sql(),
        ))
        .await?;

    rows.iter()
        .map(|row| {
            Ok(SelectOption {
                id: row.try_get("", "id")?,
                label: row.try_get("", "label")?,
                sort_key: row.try_get("", "sort_key")?,
            })
        })
        .collect()
}
