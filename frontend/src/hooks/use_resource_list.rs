use std::rc::Rc;

use shared::screen::{self, Refresh, ScreenError};
use shared::{FormDraft, ListScreen, Resource, ScreenAction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_alert_timer::use_alert_timer;
use crate::services::api::FinanceApi;
use crate::services::logging::Logger;

/// Reducer wrapper so a `ListScreen` can live in `use_reducer`
pub struct ScreenStore<R: Resource> {
    pub screen: ListScreen<R::Entry>,
}

impl<R: Resource> Default for ScreenStore<R> {
    fn default() -> Self {
        Self {
            screen: ListScreen::for_resource::<R>(),
        }
    }
}

impl<R: Resource> Reducible for ScreenStore<R> {
    type Action = ScreenAction<R::Entry>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut screen = self.screen.clone();
        screen.apply(action);
        Rc::new(Self { screen })
    }
}

#[derive(Clone)]
pub struct ResourceListState<E> {
    pub entries: Vec<E>,
    pub draft: FormDraft,
    pub alert_visible: bool,
    pub loading: bool,
}

#[derive(Clone, PartialEq)]
pub struct ResourceListActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub update: Callback<String>,
    pub remove: Callback<String>,
    pub on_field_change: Callback<(&'static str, String)>,
}

pub struct UseResourceListResult<E> {
    pub state: ResourceListState<E>,
    pub actions: ResourceListActions,
}

/// List, create, update and delete records of one resource.
///
/// Every mutation awaits a re-fetch before finishing. Failures are logged and
/// otherwise swallowed; only validation failures show up, as the alert.
#[hook]
pub fn use_resource_list<R: Resource>(api: &FinanceApi) -> UseResourceListResult<R::Entry> {
    let store = use_reducer(ScreenStore::<R>::default);
    let loading = use_state(|| true);

    let expire_alert = {
        let dispatcher = store.dispatcher();
        use_callback((), move |generation: u64, _| {
            dispatcher.dispatch(ScreenAction::ExpireAlert(generation));
        })
    };
    use_alert_timer(store.screen.alert, expire_alert);

    let refresh = {
        let api = api.clone();
        let dispatcher = store.dispatcher();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let loading = loading.clone();

            spawn_local(async move {
                let dispatch = move |action: ScreenAction<R::Entry>| dispatcher.dispatch(action);
                match screen::load::<R, _>(&api, &dispatch).await {
                    Ok(count) => Logger::info_with_component(
                        R::NAME,
                        &format!("Data retrieved successfully ({} records)", count),
                    ),
                    Err(e) => Logger::error_with_component(
                        R::NAME,
                        &format!("Failed to retrieve data: {}", e),
                    ),
                }
                loading.set(false);
            });
        })
    };

    let submit = {
        let api = api.clone();
        let dispatcher = store.dispatcher();

        use_callback(store.screen.draft.clone(), move |_, draft: &FormDraft| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let draft = draft.clone();

            spawn_local(async move {
                let dispatch = move |action: ScreenAction<R::Entry>| dispatcher.dispatch(action);
                match screen::submit::<R, _>(&api, &draft, &dispatch).await {
                    Ok(Refresh::Synced(count)) => Logger::info_with_component(
                        R::NAME,
                        &format!("Form submitted, {} records after refresh", count),
                    ),
                    Ok(Refresh::Optimistic(e)) => Logger::warn_with_component(
                        R::NAME,
                        &format!("Form submitted but refresh failed, showing local copy: {}", e),
                    ),
                    Err(ScreenError::Invalid(e)) => Logger::debug_with_component(R::NAME, &e.to_string()),
                    Err(e) => Logger::error_with_component(
                        R::NAME,
                        &format!("Error submitting form: {}", e),
                    ),
                }
            });
        })
    };

    let update = {
        let api = api.clone();
        let dispatcher = store.dispatcher();

        use_callback(store.screen.draft.clone(), move |id: String, draft: &FormDraft| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let draft = draft.clone();

            spawn_local(async move {
                let dispatch = move |action: ScreenAction<R::Entry>| dispatcher.dispatch(action);
                match screen::update::<R, _>(&api, &id, &draft, &dispatch).await {
                    Ok(_) => Logger::info_with_component(R::NAME, &format!("Data updated successfully ({})", id)),
                    Err(e) => Logger::error_with_component(
                        R::NAME,
                        &format!("Failed to update {}: {}", id, e),
                    ),
                }
            });
        })
    };

    let remove = {
        let api = api.clone();
        let dispatcher = store.dispatcher();

        use_callback((), move |id: String, _| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                let dispatch = move |action: ScreenAction<R::Entry>| dispatcher.dispatch(action);
                match screen::remove::<R, _>(&api, &id, &dispatch).await {
                    Ok(_) => Logger::info_with_component(R::NAME, &format!("Data deleted successfully ({})", id)),
                    Err(e) => Logger::error_with_component(
                        R::NAME,
                        &format!("Failed to delete {}: {}", id, e),
                    ),
                }
            });
        })
    };

    let on_field_change = {
        let dispatcher = store.dispatcher();
        use_callback((), move |(name, value): (&'static str, String), _| {
            dispatcher.dispatch(ScreenAction::SetField(name, value));
        })
    };

    // Load on mount
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = ResourceListState {
        entries: store.screen.entries.clone(),
        draft: store.screen.draft.clone(),
        alert_visible: store.screen.alert.is_visible(),
        loading: *loading,
    };

    let actions = ResourceListActions {
        refresh,
        submit,
        update,
        remove,
        on_field_change,
    };

    UseResourceListResult { state, actions }
}
