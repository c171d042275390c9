use shared::Resource;
use yew::prelude::*;

use super::alert_banner::AlertBanner;
use super::entry_form::EntryForm;
use super::entry_table::{EntryTable, TableRow};
use crate::hooks::use_resource_list::use_resource_list;
use crate::services::api::FinanceApi;

#[derive(Properties, PartialEq)]
pub struct ResourceScreenProps {
    pub title: AttrValue,
    pub api: FinanceApi,
}

/// Form plus table for one resource. Budget and Income are both this screen.
#[function_component(ResourceScreen)]
pub fn resource_screen<R: Resource>(props: &ResourceScreenProps) -> Html {
    let list = use_resource_list::<R>(&props.api);

    let rows: Vec<TableRow> = list
        .state
        .entries
        .iter()
        .map(|entry| TableRow {
            id: R::entry_id(entry).map(str::to_string),
            cells: R::cells(entry),
        })
        .collect();

    html! {
        <section class="resource-screen">
            <AlertBanner visible={list.state.alert_visible} />
            <h1 class="screen-title">{props.title.clone()}</h1>
            <EntryForm
                fields={R::FIELDS}
                draft={list.state.draft.clone()}
                on_field_change={list.actions.on_field_change.clone()}
                on_submit={list.actions.submit.clone()}
            />
            <EntryTable
                columns={R::COLUMNS}
                {rows}
                loading={list.state.loading}
                on_edit={list.actions.update.clone()}
                on_delete={list.actions.remove.clone()}
            />
        </section>
    }
}
