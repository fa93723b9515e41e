use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::auth::{SessionContext, SessionProvider};
use crate::components::toast::ToastProvider;

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod export;
pub mod google_identity;
pub mod state;
pub mod pages {
    pub mod dashboard;
    pub mod import_judges;
    pub mod judges;
    pub mod login;
    pub mod not_found;
    pub mod schedule;
    pub mod settings;
    pub mod signup;
    pub mod startups;
}

use pages::{dashboard::Dashboard, login::Login, not_found::NotFound, signup::Signup};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/*")]
    DashboardAny,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Where `route` should send the visitor instead, if anywhere.
pub fn guard(route: &Route, authenticated: bool) -> Option<Route> {
    match (route, authenticated) {
        (Route::Home, true) => Some(Route::Dashboard),
        (Route::Home, false) => Some(Route::Login),
        (Route::Dashboard | Route::DashboardAny, false) => Some(Route::Login),
        (Route::Login | Route::Signup, true) => Some(Route::Dashboard),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardedRouteProps {
    pub route: Route,
}

#[function_component(GuardedRoute)]
pub fn guarded_route(props: &GuardedRouteProps) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");

    if let Some(target) = guard(&props.route, session.is_authenticated()) {
        debug!("Redirecting {:?} to {:?}", props.route, target);
        return html! { <Redirect<Route> to={target} /> };
    }

    match props.route {
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::Dashboard | Route::DashboardAny => html! { <Dashboard /> },
        Route::Home | Route::NotFound => html! { <NotFound /> },
    }
}

fn switch(route: Route) -> Html {
    debug!("Route switch: {:?}", route);
    html! { <GuardedRoute {route} /> }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ToastProvider>
            <SessionProvider>
                <BrowserRouter>
                    <main class="app-container">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </SessionProvider>
        </ToastProvider>
    }
}

pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run_app();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_follows_session() {
        assert_eq!(guard(&Route::Home, true), Some(Route::Dashboard));
        assert_eq!(guard(&Route::Home, false), Some(Route::Login));
    }

    #[test]
    fn test_dashboard_requires_login() {
        assert_eq!(guard(&Route::Dashboard, false), Some(Route::Login));
        assert_eq!(guard(&Route::DashboardAny, false), Some(Route::Login));
        assert_eq!(guard(&Route::Dashboard, true), None);
        assert_eq!(guard(&Route::DashboardAny, true), None);
    }

    #[test]
    fn test_signed_in_users_skip_auth_pages() {
        assert_eq!(guard(&Route::Login, true), Some(Route::Dashboard));
        assert_eq!(guard(&Route::Signup, true), Some(Route::Dashboard));
        assert_eq!(guard(&Route::Login, false), None);
        assert_eq!(guard(&Route::Signup, false), None);
    }

    #[test]
    fn test_not_found_is_public() {
        assert_eq!(guard(&Route::NotFound, false), None);
        assert_eq!(guard(&Route::NotFound, true), None);
    }

    #[test]
    fn test_dashboard_subpaths_recognised() {
        assert_eq!(Route::recognize("/dashboard/startups"), Some(Route::DashboardAny));
    }
}
