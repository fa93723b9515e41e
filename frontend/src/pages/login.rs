use yew::prelude::*;
use yew::events::SubmitEvent;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use log::debug;

use crate::auth::SessionContext;
use crate::Route;

/// Credentials are not checked against anything; both fields only have to be
/// filled in.
pub(crate) fn check_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please enter both email and password");
    }
    Ok(())
}

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);

    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Login rendered outside a router");

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let login = session.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(message) = check_login(&email, &password) {
                error.set(message.to_string());
                return;
            }

            debug!("Login accepted, redirecting to dashboard");
            error.set(String::new());
            login.emit(());
            navigator.push(&Route::Dashboard);
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    html! {
        <div class="auth-page">
            <form class="form" onsubmit={onsubmit}>
                <span class="input-span">
                    <label for="email" class="label">{"Email"}</label>
                    <input id="email" name="email" type="email" required=true onchange={onemailchange} />
                </span>
                <span class="input-span">
                    <label for="password" class="label">{"Password"}</label>
                    <input id="password" name="password" type="password" required=true onchange={onpasswordchange} />
                </span>

                if !error.is_empty() {
                    <div class="form-error">{error.to_string()}</div>
                }

                <input class="submit" type="submit" value="Log in" />
                <span class="span">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Signup}>{"Sign up"}</Link<Route>>
                </span>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert!(check_login("ops@example.com", "secret").is_ok());
        assert!(check_login("", "secret").is_err());
        assert!(check_login("   ", "secret").is_err());
        assert!(check_login("ops@example.com", "").is_err());
    }
}
