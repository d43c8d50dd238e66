use contracts::shared::select_option::Selection;
use leptos::prelude::*;

use crate::shared::remote_select::RemoteOptionSelector;

/// Имя коллекции площадок на сервере
pub const VENUE_COLLECTION: &str = "venue";

/// Фильтр по площадке: одна площадка или все
#[component]
pub fn VenueSelector(
    /// Текущий выбор
    #[prop(into)]
    selected: Signal<Selection>,
    /// Callback при выборе площадки
    on_change: Callback<Selection>,
) -> impl IntoView {
    view! {
        <RemoteOptionSelector
            collection=VENUE_COLLECTION
            label="Площадка".to_string()
            selected=selected
            on_change=on_change
            show_status=true
            id="venue-select".to_string()
        />
    }
}
