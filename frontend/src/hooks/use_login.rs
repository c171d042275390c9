use std::rc::Rc;

use shared::login;
use shared::{LoginAction, LoginForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::FinanceApi;
use crate::services::logging::Logger;

const COMPONENT: &str = "login";

/// Reducer wrapper so a `LoginForm` can live in `use_reducer`
#[derive(Default)]
pub struct LoginStore {
    pub form: LoginForm,
}

impl Reducible for LoginStore {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.form.clone();
        form.apply(action);
        Rc::new(Self { form })
    }
}

#[derive(Clone)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub submitting: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseLoginActions {
    pub submit: Callback<()>,
    pub on_email_change: Callback<InputEvent>,
    pub on_password_change: Callback<InputEvent>,
}

pub struct UseLoginResult {
    pub state: LoginState,
    pub actions: UseLoginActions,
}

/// Posts the typed credentials to the login endpoint and logs the outcome.
/// The returned token is not kept here; both fields are cleared afterwards
/// whether or not the login worked.
#[hook]
pub fn use_login(api: &FinanceApi) -> UseLoginResult {
    let store = use_reducer(LoginStore::default);

    let submit = {
        let api = api.clone();
        let dispatcher = store.dispatcher();

        use_callback(store.form.clone(), move |_, form: &LoginForm| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let form = form.clone();

            spawn_local(async move {
                Logger::debug_with_component(COMPONENT, &format!("Submitting {:?}", form));
                let dispatch = move |action: LoginAction| dispatcher.dispatch(action);

                match login::submit(&api, &form, &dispatch).await {
                    Ok(_response) => Logger::info_with_component(COMPONENT, "Login successful"),
                    Err(e) => Logger::error_with_component(COMPONENT, &format!("Login failed: {}", e)),
                }
            });
        })
    };

    let on_email_change = {
        let dispatcher = store.dispatcher();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(LoginAction::SetEmail(input.value()));
        })
    };

    let on_password_change = {
        let dispatcher = store.dispatcher();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(LoginAction::SetPassword(input.value()));
        })
    };

    let state = LoginState {
        email: store.form.email.clone(),
        password: store.form.password.clone(),
        submitting: store.form.submitting,
    };

    let actions = UseLoginActions {
        submit,
        on_email_change,
        on_password_change,
    };

    UseLoginResult { state, actions }
}
