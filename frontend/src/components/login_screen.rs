use yew::prelude::*;

use crate::hooks::use_login::use_login;
use crate::services::api::FinanceApi;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub api: FinanceApi,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let login = use_login(&props.api);

    let onsubmit = {
        let submit = login.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <section class="login-screen">
            <h2>{"Login"}</h2>
            <form class="login-form" {onsubmit}>
                <div class="form-group">
                    <label for="email">{"email"}</label>
                    <input
                        type="text"
                        id="email"
                        name="email"
                        placeholder="Enter email"
                        required={true}
                        value={login.state.email.clone()}
                        oninput={login.actions.on_email_change.clone()}
                    />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        placeholder="Enter your password"
                        required={true}
                        value={login.state.password.clone()}
                        oninput={login.actions.on_password_change.clone()}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={login.state.submitting}>
                    {if login.state.submitting { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </section>
    }
}
