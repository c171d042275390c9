use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    pub visible: bool,
    #[prop_or(AttrValue::Static("Please fill in all the fields before submitting!!"))]
    pub message: AttrValue,
}

#[function_component(AlertBanner)]
pub fn alert_banner(props: &AlertBannerProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="form-message error" role="alert">
            {props.message.clone()}
        </div>
    }
}
