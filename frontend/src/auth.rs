use crate::config::Config;
use gloo_storage::{LocalStorage, Storage};
use log::{debug, error};
use std::rc::Rc;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

/// Whether the operator has signed in on this browser. Loaded once when the
/// provider mounts and kept in sync with local storage on every change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub authenticated: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Login,
    Logout,
}

impl SessionState {
    /// Reads the persisted flag. A missing or unreadable key means signed out.
    pub fn load() -> Self {
        let authenticated = LocalStorage::get::<bool>(Config::auth_storage_key()).unwrap_or(false);
        debug!("Session loaded, authenticated = {}", authenticated);
        Self { authenticated }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login => {
                if let Err(e) = LocalStorage::set(Config::auth_storage_key(), true) {
                    error!("Failed to store session flag in local storage: {}", e);
                }
                Rc::new(Self { authenticated: true })
            }
            SessionAction::Logout => {
                LocalStorage::delete(Config::auth_storage_key());
                Rc::new(Self { authenticated: false })
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    pub login: Callback<()>,
    pub logout: Callback<()>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.state.authenticated
    }
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer_eq(SessionState::load);

    let login = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::Login))
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::Logout))
    };

    let context = SessionContext {
        state: (*session).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
