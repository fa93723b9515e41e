use log::{debug, error, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::Callback;

// Thin wrapper over the Google Identity Services token client that
// index.html loads from accounts.google.com/gsi/client.

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))
}

fn lookup(target: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    let mut current = target.clone();
    for key in path {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(key))?;
        if current.is_undefined() || current.is_null() {
            return Err(JsValue::from_str(&format!("'{}' is not loaded", path.join("."))));
        }
    }
    Ok(current)
}

fn read_string(value: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
}

/// Callbacks of the token request currently in flight. Each response is
/// delivered once, to the most recent request.
#[derive(Default)]
struct PendingRequest {
    on_token: Option<Callback<String>>,
    on_error: Option<Callback<String>>,
}

impl PendingRequest {
    fn replace(&mut self, on_token: Callback<String>, on_error: Callback<String>) {
        if self.on_token.is_some() {
            debug!("Replacing an unanswered Google token request");
        }
        self.on_token = Some(on_token);
        self.on_error = Some(on_error);
    }

    /// Returns false when nobody was waiting for the token.
    fn resolve(&mut self, token: String) -> bool {
        self.on_error = None;
        match self.on_token.take() {
            Some(on_token) => {
                on_token.emit(token);
                true
            }
            None => false,
        }
    }

    fn reject(&mut self, reason: String) -> bool {
        self.on_token = None;
        match self.on_error.take() {
            Some(on_error) => {
                on_error.emit(reason);
                true
            }
            None => false,
        }
    }
}

/// One token client per page. The JS client keeps calling the same two
/// closures, so they live as long as this value does.
struct TokenClient {
    client_id: String,
    scope: String,
    client: JsValue,
    pending: Rc<RefCell<PendingRequest>>,
    _on_response: Closure<dyn FnMut(JsValue)>,
    _on_popup_error: Closure<dyn FnMut(JsValue)>,
}

thread_local! {
    static TOKEN_CLIENT: RefCell<Option<TokenClient>> = RefCell::new(None);
}

impl TokenClient {
    fn new(client_id: &str, scope: &str) -> Result<Self, JsValue> {
        let oauth2 = lookup(&JsValue::from(window()?), &["google", "accounts", "oauth2"])?;
        let init_token_client: js_sys::Function =
            lookup(&oauth2, &["initTokenClient"])?.dyn_into()?;
        let pending = Rc::new(RefCell::new(PendingRequest::default()));

        let on_response = {
            let pending = pending.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
                let delivered = match read_string(&response, "access_token") {
                    Some(token) => {
                        debug!("Received Google access token");
                        pending.borrow_mut().resolve(token)
                    }
                    None => {
                        let reason = read_string(&response, "error").unwrap_or_else(|| "no token".to_string());
                        error!("Google token request failed: {}", reason);
                        pending.borrow_mut().reject(reason)
                    }
                };
                if !delivered {
                    warn!("Google token response arrived with no request waiting");
                }
            })
        };

        let on_popup_error = {
            let pending = pending.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
                let reason = read_string(&err, "type").unwrap_or_else(|| "popup error".to_string());
                error!("Google sign-in popup failed: {}", reason);
                pending.borrow_mut().reject(reason);
            })
        };

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("client_id"), &JsValue::from_str(client_id))?;
        js_sys::Reflect::set(&options, &JsValue::from_str("scope"), &JsValue::from_str(scope))?;
        js_sys::Reflect::set(&options, &JsValue::from_str("callback"), on_response.as_ref())?;
        js_sys::Reflect::set(&options, &JsValue::from_str("error_callback"), on_popup_error.as_ref())?;
        let client = init_token_client.call1(&oauth2, &options)?;
        debug!("Created Google token client");

        Ok(Self {
            client_id: client_id.to_string(),
            scope: scope.to_string(),
            client,
            pending,
            _on_response: on_response,
            _on_popup_error: on_popup_error,
        })
    }

    fn request(&self, on_token: Callback<String>, on_error: Callback<String>) -> Result<(), JsValue> {
        self.pending.borrow_mut().replace(on_token, on_error);
        let request: js_sys::Function = lookup(&self.client, &["requestAccessToken"])?.dyn_into()?;
        request.call0(&self.client)?;
        Ok(())
    }
}

/// Opens the Google consent popup and reports the resulting access token
/// through `on_token`, or a reason through `on_error`. The token client is
/// created on first use and reused by later requests.
pub fn request_access_token(
    client_id: &str,
    scope: &str,
    on_token: Callback<String>,
    on_error: Callback<String>,
) -> Result<(), JsValue> {
    TOKEN_CLIENT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let reusable = slot
            .as_ref()
            .is_some_and(|client| client.client_id == client_id && client.scope == scope);
        if !reusable {
            *slot = Some(TokenClient::new(client_id, scope)?);
        }
        match slot.as_ref() {
            Some(client) => client.request(on_token, on_error),
            None => Err(JsValue::from_str("Google token client unavailable")),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, Callback<String>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let seen = seen.clone();
            Callback::from(move |value: String| seen.borrow_mut().push(value))
        };
        (seen, callback)
    }

    #[test]
    fn test_token_goes_to_latest_request_only() {
        let (first_tokens, first_on_token) = recorder();
        let (second_tokens, second_on_token) = recorder();
        let (errors, on_error) = recorder();

        let mut pending = PendingRequest::default();
        pending.replace(first_on_token, on_error.clone());
        pending.replace(second_on_token, on_error);

        assert!(pending.resolve("tok".to_string()));
        assert!(first_tokens.borrow().is_empty());
        assert_eq!(*second_tokens.borrow(), vec!["tok".to_string()]);
        assert!(errors.borrow().is_empty());
    }

    #[test]
    fn test_each_request_answered_once() {
        let (tokens, on_token) = recorder();
        let (errors, on_error) = recorder();

        let mut pending = PendingRequest::default();
        pending.replace(on_token, on_error);

        assert!(pending.reject("popup_closed".to_string()));
        assert!(!pending.resolve("late".to_string()));
        assert!(!pending.reject("again".to_string()));
        assert!(tokens.borrow().is_empty());
        assert_eq!(*errors.borrow(), vec!["popup_closed".to_string()]);
    }
}
