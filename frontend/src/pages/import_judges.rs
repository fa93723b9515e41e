use crate::api::sheets::fetch_judges;
use crate::components::modal::FormModal;
use crate::config::Config;
use crate::google_identity::request_access_token;
use log::{debug, error};
use shared::JudgeRecord;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const LOGIN_FAILED: &str = "Failed to log in to Google. Please try again.";

#[derive(Properties, Clone, PartialEq)]
pub struct ImportJudgesProps {
    /// Token from an earlier Google sign-in, kept by the dashboard
    pub access_token: Option<String>,
    pub on_token: Callback<String>,
    pub on_imported: Callback<Vec<JudgeRecord>>,
    pub on_close: Callback<()>,
}

/// Modal that pulls judges from a Google Sheets document. The parsed rows are
/// handed to `on_imported`; deduplication happens in the judges reducer so it
/// sees the table as it is when the request finishes.
#[function_component(ImportJudges)]
pub fn import_judges(props: &ImportJudgesProps) -> Html {
    let sheet_url = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_url_input = {
        let sheet_url = sheet_url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            sheet_url.set(input.value());
        })
    };

    let on_google_login = {
        let on_token = props.on_token.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(client_id) = Config::google_client_id() else {
                error!("GOOGLE_CLIENT_ID was not set at build time");
                error.set(Some(LOGIN_FAILED.to_string()));
                return;
            };

            let on_success = {
                let on_token = on_token.clone();
                let error = error.clone();
                Callback::from(move |token: String| {
                    error.set(None);
                    on_token.emit(token);
                })
            };
            let on_failure = {
                let error = error.clone();
                Callback::from(move |_: String| error.set(Some(LOGIN_FAILED.to_string())))
            };

            if let Err(e) = request_access_token(&client_id, &Config::sheets_oauth_scope(), on_success, on_failure) {
                error!("Could not start Google sign-in: {:?}", e);
                error.set(Some(LOGIN_FAILED.to_string()));
            }
        })
    };

    let on_import = {
        let sheet_url = sheet_url.clone();
        let error = error.clone();
        let loading = loading.clone();
        let access_token = props.access_token.clone();
        let on_imported = props.on_imported.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            let url = (*sheet_url).clone();
            let token = access_token.clone();
            let error = error.clone();
            let loading = loading.clone();
            let on_imported = on_imported.clone();
            let on_close = on_close.clone();

            loading.set(true);
            spawn_local(async move {
                match fetch_judges(&url, token.as_deref()).await {
                    Ok(judges) => {
                        debug!("Import returned {} judges", judges.len());
                        loading.set(false);
                        on_imported.emit(judges);
                        on_close.emit(());
                    }
                    Err(e) => {
                        error!("Judge import failed: {}", e);
                        loading.set(false);
                        error.set(Some(e.user_message()));
                    }
                }
            });
        })
    };

    html! {
        <FormModal
            title="Import Judges"
            error={(*error).clone()}
            on_close={props.on_close.clone()}
            on_submit={on_import}
            submit_label={if *loading { "IMPORTING..." } else { "IMPORT" }}
        >
            <div class="form-field">
                <label>
                    {"Google Sheets URL:"}
                    <input
                        type="url"
                        placeholder="https://docs.google.com/spreadsheets/d/..."
                        value={(*sheet_url).clone()}
                        oninput={on_url_input}
                    />
                </label>
            </div>
            <div class="google-login">
                if props.access_token.is_some() {
                    <span class="google-status">{"Signed in to Google"}</span>
                } else {
                    <button type="button" class="google-button" onclick={on_google_login}>{"Login with Google"}</button>
                }
            </div>
        </FormModal>
    }
}
