use std::sync::Arc;

use contracts::shared::select_option::Selection;
use leptos::prelude::*;

use super::loader::{load_collection, LifetimeToken, LoadOutcome};
use super::state::{LoadState, LoadStatus, SelectorModel, DEFAULT_ALL_LABEL};
use crate::shared::option_source::{FetchError, OptionSource, OptionSourceContext};

/// Выпадающий список с опциями из удалённой коллекции и пунктом "все"
///
/// Коллекция загружается один раз при монтировании. Выбор пользователя
/// передаётся владельцу через `on_change`; загрузка данных его не вызывает.
#[component]
pub fn RemoteOptionSelector(
    /// Имя коллекции на сервере (например, "venue")
    #[prop(into)]
    collection: String,
    /// Текущий выбор, хранится у владельца
    #[prop(into)]
    selected: Signal<Selection>,
    /// Callback при выборе пользователем
    on_change: Callback<Selection>,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Текст пункта "все"
    #[prop(optional, into)]
    all_label: Option<String>,
    /// Явно переданный источник; иначе берётся из контекста
    #[prop(optional)]
    source: Option<Arc<dyn OptionSource>>,
    /// Показывать статус загрузки под списком
    #[prop(optional)]
    show_status: bool,
    /// Callback после применения результата загрузки
    #[prop(optional)]
    on_status: Option<Callback<LoadStatus>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or_else(|| DEFAULT_ALL_LABEL.to_string());
    let model = RwSignal::new(SelectorModel::default());

    let token = LifetimeToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    let source = source.or_else(|| use_context::<OptionSourceContext>().map(|ctx| ctx.0));
    match source {
        Some(source) => {
            let collection = collection.clone();
            // Загрузка коллекции при монтировании
            leptos::task::spawn_local(async move {
                if let LoadOutcome::Applied(result) =
                    load_collection(source.as_ref(), &collection, &token).await
                {
                    model.update(|m| m.apply(result));
                    if let Some(on_status) = on_status {
                        on_status.run(model.with_untracked(|m| m.status().clone()));
                    }
                }
            });
        }
        None => {
            log::error!("RemoteOptionSelector '{}' has no OptionSource", collection);
            model.update(|m| m.apply(Err(FetchError::NotConfigured)));
            if let Some(on_status) = on_status {
                on_status.run(LoadStatus::Failed(FetchError::NotConfigured));
            }
        }
    }

    let options = Memo::new(move |_| {
        let current = selected.get();
        model.with(|m| m.render_options(&current, &all_label))
    });
    let current_value = move || selected.get().control_value();
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group remote-select">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                aria-busy=move || model.with(|m| matches!(m.status(), LoadStatus::Loading)).to_string()
                prop:value=current_value
                on:change=move |ev| dispatch_change(&event_target_value(&ev), |s| on_change.run(s))
            >
                <For
                    each=move || options.get()
                    key=|opt| opt.value.clone()
                    children=move |opt| {
                        let value = opt.value.clone();
                        let is_selected = move || current_value() == value;
                        view! {
                            <option value=opt.value selected=is_selected>
                                {opt.label}
                            </option>
                        }
                    }
                />
            </select>
            {move || show_status.then(|| status_hint(model)).flatten()}
        </div>
    }
}

fn status_hint(model: RwSignal<SelectorModel>) -> Option<AnyView> {
    model.with(|m| match m.load_state() {
        LoadState::Loading => Some(
            view! { <span class="remote-select__status">"Загрузка..."</span> }.into_any(),
        ),
        LoadState::Failed(err) => Some(
            view! {
                <span class="remote-select__status remote-select__status--error" title=err.to_string()>
                    "Список недоступен"
                </span>
            }
            .into_any(),
        ),
        LoadState::Loaded(_) => None,
    })
}

/// Map the raw `<select>` value to a selection and report it once
pub(crate) fn dispatch_change(value: &str, on_change: impl FnOnce(Selection)) {
    on_change(Selection::from_control_value(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote_select::state::Collection;
    use async_trait::async_trait;
    use contracts::shared::select_option::SelectOption;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::sync::Notify;
    use tokio::task::LocalSet;

    struct CountingSource {
        calls: AtomicUsize,
        // when set, the request stays pending until notified
        gate: Option<Arc<Notify>>,
    }

    #[async_trait(?Send)]
    impl OptionSource for CountingSource {
        async fn fetch_options(&self, _collection: &str) -> Result<Vec<SelectOption>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            Ok(vec![
                SelectOption::new("b", "Beta", "Beta"),
                SelectOption::new("a", "Alpha", "Alpha"),
            ])
        }
    }

    struct Mounted {
        owner: Owner,
        source: Arc<CountingSource>,
        changes: Arc<AtomicUsize>,
        statuses: Arc<Mutex<Vec<LoadStatus>>>,
    }

    fn mount(gate: Option<Arc<Notify>>) -> Mounted {
        let _ = any_spawner::Executor::init_tokio();

        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            gate,
        });
        let changes = Arc::new(AtomicUsize::new(0));
        let statuses = Arc::new(Mutex::new(Vec::new()));

        let owner = Owner::new();
        owner.with(|| {
            let changes = changes.clone();
            let statuses = statuses.clone();
            let props = RemoteOptionSelectorProps::builder()
                .collection("venue")
                .selected(Signal::stored(Selection::All))
                .on_change(Callback::new(move |_: Selection| {
                    changes.fetch_add(1, Ordering::SeqCst);
                }))
                .source(source.clone() as Arc<dyn OptionSource>)
                .on_status(Callback::new(move |status: LoadStatus| {
                    statuses.lock().unwrap().push(status);
                }))
                .build();
            let _view = RemoteOptionSelector(props);
        });

        Mounted {
            owner,
            source,
            changes,
            statuses,
        }
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_mount_reads_once_and_never_reports_a_change() {
        LocalSet::new()
            .run_until(async {
                let mounted = mount(None);
                settle().await;

                assert_eq!(mounted.source.calls.load(Ordering::SeqCst), 1);
                assert_eq!(mounted.changes.load(Ordering::SeqCst), 0);
                assert_eq!(*mounted.statuses.lock().unwrap(), vec![LoadStatus::Loaded]);

                settle().await;
                assert_eq!(mounted.source.calls.load(Ordering::SeqCst), 1);
                mounted.owner.cleanup();
            })
            .await;
    }

    #[tokio::test]
    async fn test_cleanup_before_response_applies_nothing() {
        LocalSet::new()
            .run_until(async {
                let gate = Arc::new(Notify::new());
                let mounted = mount(Some(gate.clone()));
                settle().await;
                assert_eq!(mounted.source.calls.load(Ordering::SeqCst), 1);

                mounted.owner.cleanup();
                gate.notify_one();
                settle().await;

                assert!(mounted.statuses.lock().unwrap().is_empty());
                assert_eq!(mounted.changes.load(Ordering::SeqCst), 0);
            })
            .await;
    }

    #[test]
    fn test_sentinel_reports_all() {
        let mut reported = Vec::new();
        dispatch_change("", |s| reported.push(s));
        assert_eq!(reported, vec![Selection::All]);
    }

    #[test]
    fn test_choosing_beta_reports_its_id_once() {
        let mut model = SelectorModel::default();
        model.apply(Ok(Collection::new(vec![
            SelectOption::new("a", "Alpha", "Alpha"),
            SelectOption::new("b", "Beta", "Beta"),
        ])));
        let options = model.render_options(&Selection::All, DEFAULT_ALL_LABEL);
        let beta = options.iter().find(|o| o.label == "Beta").unwrap();

        let mut reported = Vec::new();
        dispatch_change(&beta.value, |s| reported.push(s));

        assert_eq!(reported, vec![Selection::One("b".to_string())]);
    }
}
