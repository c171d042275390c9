use shared::{Budgets, Incomes};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::{LoginScreen, ResourceScreen};
use config::AppConfig;
use services::api::build_api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Budget,
    Income,
    Login,
}

impl Page {
    const ALL: [Page; 3] = [Page::Budget, Page::Income, Page::Login];

    fn label(&self) -> &'static str {
        match self {
            Page::Budget => "Budget",
            Page::Income => "Income",
            Page::Login => "Login",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    // One session for the whole app, read from storage at start-up
    let api = use_memo((), |_| build_api(&AppConfig::from_build_env()));
    let page = use_state(|| Page::Budget);

    let content = match *page {
        Page::Budget => html! { <ResourceScreen<Budgets> title="Budget" api={(*api).clone()} /> },
        Page::Income => html! { <ResourceScreen<Incomes> title="Add Incomes" api={(*api).clone()} /> },
        Page::Login => html! { <LoginScreen api={(*api).clone()} /> },
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Finance Tracker"}</h1>
                    <nav class="tabs">
                        {for Page::ALL.iter().map(|tab| {
                            let onclick = {
                                let page = page.clone();
                                let tab = *tab;
                                Callback::from(move |_: MouseEvent| page.set(tab))
                            };
                            let class = if *page == *tab { "tab active" } else { "tab" };
                            html! { <button {class} {onclick}>{tab.label()}</button> }
                        })}
                    </nav>
                </div>
            </header>
            <main class="main">
                <div class="container">{content}</div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
