use crate::auth::SessionContext;
use crate::Route;
use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct SignupForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
}

impl SignupForm {
    fn check(&self) -> Result<(), &'static str> {
        if [&self.name, &self.email, &self.password, &self.confirm_password]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err("Please fill in every field");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        Ok(())
    }
}

/// Sign-up marks the browser as signed in, the same as logging in.
#[function_component(Signup)]
pub fn signup() -> Html {
    let form = use_state(SignupForm::default);
    let error = use_state(String::new);

    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Signup rendered outside a router");

    let on_field = |apply: fn(&mut SignupForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let login = session.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(message) = form.check() {
                error.set(message.to_string());
                return;
            }
            debug!("Account created for {}", form.email);
            login.emit(());
            navigator.push(&Route::Dashboard);
        })
    };

    html! {
        <div class="auth-page">
            <form class="form" {onsubmit}>
                <span class="input-span">
                    <label for="name" class="label">{"Full Name"}</label>
                    <input type="text" name="name" id="name" required=true
                        onchange={on_field(|f, v| f.name = v)} />
                </span>
                <span class="input-span">
                    <label for="email" class="label">{"Email"}</label>
                    <input type="email" name="email" id="email" required=true
                        onchange={on_field(|f, v| f.email = v)} />
                </span>
                <span class="input-span">
                    <label for="password" class="label">{"Password"}</label>
                    <input type="password" name="password" id="password" required=true
                        onchange={on_field(|f, v| f.password = v)} />
                </span>
                <span class="input-span">
                    <label for="confirmPassword" class="label">{"Confirm Password"}</label>
                    <input type="password" name="confirmPassword" id="confirmPassword" required=true
                        onchange={on_field(|f, v| f.confirm_password = v)} />
                </span>

                if !error.is_empty() {
                    <div class="form-error">{error.to_string()}</div>
                }

                <input class="submit" type="submit" value="Sign up" />
                <span class="span">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                </span>
            </form>
        </div>
    }
}
