use std::collections::HashSet;

use contracts::shared::select_option::{SelectOption, Selection, ALL_VALUE};

use crate::shared::option_source::FetchError;

/// Label of the sentinel entry
pub const DEFAULT_ALL_LABEL: &str = "🌐 All";

/// Loaded options, always ordered by `sort_key` ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection(Vec<SelectOption>);

impl Collection {
    /// Stable sort: entries with equal keys keep the server order.
    ///
    /// Ids must be unique and distinct from the "all" value; offending
    /// entries are dropped (first occurrence wins).
    pub fn new(items: Vec<SelectOption>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let mut kept: Vec<SelectOption> = Vec::with_capacity(items.len());
        for item in items {
            if item.id == ALL_VALUE {
                log::warn!("Dropping option '{}': empty id clashes with the \"all\" entry", item.label);
                continue;
            }
            if !seen.insert(item.id.clone()) {
                log::warn!("Dropping option '{}': duplicate id '{}'", item.label, item.id);
                continue;
            }
            kept.push(item);
        }
        kept.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
        Self(kept)
    }

    pub fn items(&self) -> &[SelectOption] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|o| o.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(FetchError),
}

/// Borrowed view of the selector state for rendering feedback
#[derive(Debug, PartialEq, Eq)]
pub enum LoadState<'a> {
    Loading,
    Loaded(&'a Collection),
    Failed(&'a FetchError),
}

/// `<option>` entry as rendered by the control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub value: String,
    pub label: String,
}

/// Состояние селектора: последняя успешно загруженная коллекция и статус загрузки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorModel {
    collection: Collection,
    status: LoadStatus,
}

impl Default for SelectorModel {
    fn default() -> Self {
        Self {
            collection: Collection::default(),
            status: LoadStatus::Loading,
        }
    }
}

impl SelectorModel {
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn load_state(&self) -> LoadState<'_> {
        match &self.status {
            LoadStatus::Loading => LoadState::Loading,
            LoadStatus::Loaded => LoadState::Loaded(&self.collection),
            LoadStatus::Failed(err) => LoadState::Failed(err),
        }
    }

    /// Success replaces the collection wholesale; failure only records the reason
    pub fn apply(&mut self, result: Result<Collection, FetchError>) {
        match result {
            Ok(collection) => {
                self.collection = collection;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                self.status = LoadStatus::Failed(err);
            }
        }
    }

    /// Sentinel first, then the collection in order.
    ///
    /// A selected id that is not in the collection is appended under its raw
    /// id so the control keeps showing the owner's value.
    pub fn render_options(&self, selected: &Selection, all_label: &str) -> Vec<RenderedOption> {
        let mut options = Vec::with_capacity(self.collection.len() + 2);
        options.push(RenderedOption {
            value: ALL_VALUE.to_string(),
            label: all_label.to_string(),
        });
        options.extend(self.collection.items().iter().map(|o| RenderedOption {
            value: o.id.clone(),
            label: o.label.clone(),
        }));

        if let Selection::One(id) = selected {
            if id != ALL_VALUE && !self.collection.contains(id) {
                options.push(RenderedOption {
                    value: id.clone(),
                    label: id.clone(),
                });
            }
        }
        options
    }
}
