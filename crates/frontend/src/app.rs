use crate::domain::a001_venue::ui::selector::VenueSelector;
use crate::shared::option_source::{HttpOptionSource, OptionSourceContext};
use contracts::shared::select_option::Selection;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One HTTP client for the whole tree; selectors pick it up from context.
    provide_context(OptionSourceContext::new(HttpOptionSource::from_window()));

    view! {
        <OrdersFilterBar />
    }
}

/// Панель фильтров списка заказов
#[component]
fn OrdersFilterBar() -> impl IntoView {
    let (venue, set_venue) = signal(Selection::All);

    let on_venue_change = Callback::new(move |selection: Selection| {
        log::debug!("Venue filter changed: {:?}", selection);
        set_venue.set(selection);
    });

    view! {
        <div class="filter-panel">
            <VenueSelector selected=venue on_change=on_venue_change />
            <span class="filter-panel__summary">
                {move || match venue.get() {
                    Selection::All => "Все площадки".to_string(),
                    Selection::One(id) => format!("Площадка: {}", id),
                }}
            </span>
        </div>
    }
}
