use shared::{FieldSpec, FormDraft, InputKind};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EntryFormProps {
    pub fields: &'static [FieldSpec],
    pub draft: FormDraft,
    pub on_field_change: Callback<(&'static str, String)>,
    pub on_submit: Callback<()>,
}

/// One input per field, rendered from the resource's field table
#[function_component(EntryForm)]
pub fn entry_form(props: &EntryFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="entry-form" {onsubmit}>
            {for props.fields.iter().map(|field| html! {
                <div class="form-group">
                    <label for={field.name}>{field.label}</label>
                    {field_input(field, props.draft.get(field.name), &props.on_field_change)}
                </div>
            })}
            <button type="submit" class="btn btn-primary">{"Submit"}</button>
        </form>
    }
}

fn field_input(field: &FieldSpec, value: &str, on_field_change: &Callback<(&'static str, String)>) -> Html {
    let name = field.name;
    let value = value.to_string();

    // Text-like inputs report on every keystroke so a click on Submit always
    // sees the latest draft.
    let oninput = {
        let on_field_change = on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(text) = text_value(&e) {
                on_field_change.emit((name, text));
            }
        })
    };

    match field.input {
        InputKind::Text => html! {
            <input type="text" class="form-control" id={name} {name} placeholder={field.label} {value} {oninput} />
        },
        InputKind::Number => html! {
            <input type="number" class="form-control" id={name} {name} placeholder={field.label} {value} {oninput} />
        },
        InputKind::Date => html! {
            <input type="date" class="form-control" id={name} {name} {value} {oninput} />
        },
        InputKind::TextArea => html! {
            <textarea class="form-control" id={name} {name} rows="3" {value} {oninput} />
        },
        InputKind::Select(options) => {
            let onchange = {
                let on_field_change = on_field_change.clone();
                Callback::from(move |e: Event| {
                    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                        on_field_change.emit((name, select.value()));
                    }
                })
            };

            html! {
                <select class="form-control" id={name} {name} {onchange}>
                    <option value="" selected={value.is_empty()}>{"Select options"}</option>
                    {for options.iter().map(|(option, label)| html! {
                        <option value={*option} selected={value == *option}>{*label}</option>
                    })}
                </select>
            }
        }
    }
}

fn text_value(e: &InputEvent) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value())
}
