use serde::{Deserialize, Serialize};

// ============================================================================
// Option
// ============================================================================

/// Элемент выпадающего списка, загружаемый из удалённой коллекции
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub label: String,

    #[serde(rename = "sortKey")]
    pub sort_key: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sort_key: sort_key.into(),
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Value of the `<option>` that stands for [`Selection::All`]
pub const ALL_VALUE: &str = "";

/// Выбор пользователя: либо "все" (без фильтра), либо конкретный id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Selection {
    #[default]
    All,
    One(String),
}

impl Selection {
    /// Id of the chosen entity, `None` for the sentinel
    pub fn id(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::One(id) => Some(id.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Decode the raw value of a `<select>` element
    pub fn from_control_value(value: &str) -> Self {
        if value == ALL_VALUE {
            Selection::All
        } else {
            Selection::One(value.to_string())
        }
    }

    /// Encode for the `value` attribute of a `<select>` element
    pub fn control_value(&self) -> String {
        self.id().unwrap_or(ALL_VALUE).to_string()
    }
}

impl From<Option<String>> for Selection {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(id) => Selection::One(id),
            None => Selection::All,
        }
    }
}

impl From<Selection> for Option<String> {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All => None,
            Selection::One(id) => Some(id),
        }
    }
}
