use crate::auth::SessionContext;
use crate::Route;
use shared::EditMode;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SettingsPanelProps {
    pub edit_mode: EditMode,
    pub on_edit_mode: Callback<EditMode>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Settings rendered outside a router");

    let on_mode_change = {
        let on_edit_mode = props.on_edit_mode.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mode = if input.checked() { EditMode::Checkout } else { EditMode::InPlace };
            on_edit_mode.emit(mode);
        })
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="settings-panel">
            <h3>{"Editing"}</h3>
            <label class="settings-option">
                <input
                    type="checkbox"
                    checked={props.edit_mode == EditMode::Checkout}
                    onchange={on_mode_change}
                />
                {" Move edited rows to the end of the table"}
            </label>
            <p class="settings-hint">
                {"When enabled, a row being edited leaves the table until the form is submitted, and cancelling the form discards it."}
            </p>

            <h3>{"Account"}</h3>
            <button class="logout-button" onclick={on_logout}>{"Log out"}</button>
        </div>
    }
}
