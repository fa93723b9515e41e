use crate::auth::SessionContext;
use crate::config::Config;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TopbarProps {
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Topbar)]
pub fn topbar(props: &TopbarProps) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Topbar rendered outside a router");
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: Event| on_toggle_theme.emit(()))
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="topbar">
            <div class="title">{Config::event_title()}</div>
            <div class="round-indicator">{"Round 2 in progress"}</div>
            <label class="ui-switch" title="Dark mode">
                <input type="checkbox" checked={props.dark_mode} onchange={on_toggle_theme} />
                <div class="slider">
                    <div class="circle"></div>
                </div>
            </label>
            <div class="user-menu">
                <span class="user-icon" onclick={toggle_menu}>{"👤"}</span>
                if *menu_open {
                    <div class="user-dropdown">
                        <button class="logout-button" onclick={on_logout}>{"Log out"}</button>
                    </div>
                }
            </div>
        </div>
    }
}
