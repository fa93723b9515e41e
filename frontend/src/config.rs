pub struct Config;

impl Config {
    /// Base of the Google Sheets values API
    pub fn sheets_api_base() -> String {
        "https://sheets.googleapis.com/v4/spreadsheets".to_string()
    }

    /// Range read from the judges sheet: id, name, email, expertise, status
    pub fn judges_sheet_range() -> String {
        "Sheet1!A:E".to_string()
    }

    pub fn sheets_oauth_scope() -> String {
        "https://www.googleapis.com/auth/spreadsheets.readonly".to_string()
    }

    /// OAuth client id, baked in at build time from `GOOGLE_CLIENT_ID`.
    pub fn google_client_id() -> Option<String> {
        option_env!("GOOGLE_CLIENT_ID")
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }

    /// Local storage key holding the "logged in" flag
    pub fn auth_storage_key() -> &'static str {
        "isAuthenticated"
    }

    pub fn event_title() -> String {
        "Oxbridge AI Challenge".to_string()
    }
}
