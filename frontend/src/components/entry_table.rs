use yew::prelude::*;

/// One rendered row: the record id (if the server assigned one) and its cells
#[derive(Clone, PartialEq)]
pub struct TableRow {
    pub id: Option<String>,
    pub cells: Vec<String>,
}

#[derive(Properties, PartialEq)]
pub struct EntryTableProps {
    pub columns: &'static [&'static str],
    pub rows: Vec<TableRow>,
    pub loading: bool,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(EntryTable)]
pub fn entry_table(props: &EntryTableProps) -> Html {
    if props.loading && props.rows.is_empty() {
        return html! { <div class="loading">{"Loading..."}</div> };
    }

    html! {
        <div class="table-container">
            <table class="entries-table">
                <thead>
                    <tr>
                        <th scope="col">{"#"}</th>
                        {for props.columns.iter().map(|column| html! { <th scope="col">{*column}</th> })}
                        <th scope="col">{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.rows.iter().enumerate().map(|(index, row)| {
                        // Rows inserted locally have no id yet, so nothing to edit or delete
                        let on_edit = row.id.clone().map(|id| {
                            let on_edit = props.on_edit.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
                        });
                        let on_delete = row.id.clone().map(|id| {
                            let on_delete = props.on_delete.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                        });
                        let disabled = row.id.is_none();

                        html! {
                            <tr key={index}>
                                <td>{index + 1}</td>
                                {for row.cells.iter().map(|cell| html! { <td>{cell}</td> })}
                                <td class="actions">
                                    <button class="btn btn-warning" onclick={on_edit} {disabled}>{"Edit"}</button>
                                    <button class="btn btn-danger" onclick={on_delete} {disabled}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
