use std::collections::BTreeMap;

use crate::shared::config::CollectionConfig;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("collection '{collection}': invalid identifier '{value}'")]
    InvalidIdentifier { collection: String, value: String },

    #[error("collection '{0}' is declared twice")]
    Duplicate(String),
}

/// Проверенное описание коллекции: имена таблицы и колонок безопасны для SQL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSource {
    pub name: String,
    pub table: String,
    pub id_column: String,
    pub label_column: String,
    pub sort_column: String,
    pub deleted_column: Option<String>,
}

impl CollectionSource {
    pub fn from_config(config: &CollectionConfig) -> Result<Self, RegistryError> {
        let check = |value: &str| {
            if is_valid_identifier(value) {
                Ok(value.to_string())
            } else {
                Err(RegistryError::InvalidIdentifier {
                    collection: config.name.clone(),
                    value: value.to_string(),
                })
            }
        };

        Ok(Self {
            name: config.name.clone(),
            table: check(&config.table)?,
            id_column: check(&config.id_column)?,
            label_column: check(&config.label_column)?,
            sort_column: check(
                config
                    .sort_column
                    .as_deref()
                    .unwrap_or(&config.label_column),
            )?,
            deleted_column: config.deleted_column.as_deref().map(check).transpose()?,
        })
    }

    /// `SELECT id, label, sort_key ... ORDER BY sort_key ASC`
    pub fn select_sql(&self) -> String {
        // rows without an id cannot be selected and would clash with the "all" entry
        let mut conditions = vec![
            format!("\"{}\" IS NOT NULL", self.id_column),
            format!("CAST(\"{}\" AS TEXT) <> ''", self.id_column),
        ];
        if let Some(deleted) = &self.deleted_column {
            conditions.push(format!("\"{}\" = 0", deleted));
        }

        format!(
            "SELECT CAST(\"{}\" AS TEXT) AS id, {} AS label, {} AS sort_key FROM \"{}\" \
             WHERE {} ORDER BY sort_key ASC",
            self.id_column,
            as_text(&self.label_column),
            as_text(&self.sort_column),
            self.table,
            conditions.join(" AND ")
        )
    }
}

fn as_text(column: &str) -> String {
    format!("COALESCE(CAST(\"{}\" AS TEXT), '')", column)
}

fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Коллекции, разрешённые для чтения через API
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    sources: BTreeMap<String, CollectionSource>,
}

impl CollectionRegistry {
    pub fn from_config(collections: &[CollectionConfig]) -> Result<Self, RegistryError> {
        let mut sources = BTreeMap::new();
        for config in collections {
            let source = CollectionSource::from_config(config)?;
            if sources.insert(source.name.clone(), source).is_some() {
                return Err(RegistryError::Duplicate(config.name.clone()));
            }
        }
        Ok(Self { sources })
    }

    pub fn get(&self, name: &str) -> Option<&CollectionSource> {
        self.sources.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue_config() -> CollectionConfig {
        CollectionConfig {
            name: "venue".into(),
            table: "a001_venue".into(),
            id_column: "id".into(),
            label_column: "name".into(),
            sort_column: None,
            deleted_column: Some("is_deleted".into()),
        }
    }

    #[test]
    fn test_select_sql() {
        let source = CollectionSource::from_config(&venue_config()).unwrap();
        assert_eq!(source.sort_column, "name");
        assert_eq!(
            source.select_sql(),
            "SELECT CAST(\"id\" AS TEXT) AS id, \
             COALESCE(CAST(\"name\" AS TEXT), '') AS label, \
             COALESCE(CAST(\"name\" AS TEXT), '') AS sort_key \
             FROM \"a001_venue\" \
             WHERE \"id\" IS NOT NULL AND CAST(\"id\" AS TEXT) <> '' AND \"is_deleted\" = 0 \
             ORDER BY sort_key ASC"
        );
    }

    #[test]
    fn test_select_sql_without_deleted_filter() {
        let mut config = venue_config();
        config.deleted_column = None;
        config.sort_column = Some("sort_order".into());
        let sql = CollectionSource::from_config(&config).unwrap().select_sql();
        assert!(sql.ends_with("WHERE \"id\" IS NOT NULL AND CAST(\"id\" AS TEXT) <> '' ORDER BY sort_key ASC"));
        assert!(sql.contains("CAST(\"sort_order\" AS TEXT), '') AS sort_key"));
    }

    #[test]
    fn test_rejects_injected_identifiers() {
        let mut config = venue_config();
        config.table = "a001_venue; DROP TABLE x".into();
        assert_eq!(
            CollectionSource::from_config(&config),
            Err(RegistryError::InvalidIdentifier {
                collection: "venue".into(),
                value: "a001_venue; DROP TABLE x".into(),
            })
        );

        let mut config = venue_config();
        config.label_column = "1name".into();
        assert!(CollectionSource::from_config(&config).is_err());

        let mut config = venue_config();
        config.deleted_column = Some("is\"deleted".into());
        assert!(CollectionSource::from_config(&config).is_err());
    }

    #[test]
    fn test_registry_lookup_and_duplicates() {
        let registry = CollectionRegistry::from_config(&[venue_config()]).unwrap();
        assert!(registry.get("venue").is_some());
        assert!(registry.get("orders").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["venue"]);

        let err = CollectionRegistry::from_config(&[venue_config(), venue_config()]).unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("venue".into()));
    }
}
