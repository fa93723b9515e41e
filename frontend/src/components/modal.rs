use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FormModalProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_close: Callback<()>,
    pub on_submit: Callback<()>,
    #[prop_or(AttrValue::from("Submit"))]
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay holding a record form. Closing through the × or the backdrop
/// emits `on_close`; the form's submit button emits `on_submit`.
#[function_component(FormModal)]
pub fn form_modal(props: &FormModalProps) -> Html {
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="modal" onclick={on_overlay_click}>
            <div class="modal-content" onclick={|e: MouseEvent| e.stop_propagation()}>
                <span class="close-button" onclick={on_close_click}>{"×"}</span>
                <h2 class="form-title">{props.title.clone()}</h2>
                if let Some(error) = &props.error {
                    <div class="form-error">{error}</div>
                }
                <form onsubmit={on_submit}>
                    {props.children.clone()}
                    <button type="submit" class="submit-button">{props.submit_label.clone()}</button>
                </form>
            </div>
        </div>
    }
}
