//! Judge import from a Google Sheets spreadsheet.
//!
//! Transport lives in the frontend; this module covers the parts that do
//! not touch the network: validating the pasted link, building the values
//! endpoint and turning the returned cell grid into [`JudgeRecord`]s.

use crate::error::{Result, SharedError};
use crate::models::judge::{JudgeRecord, JudgeStatus};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

lazy_static! {
    static ref SHEET_ID_REGEX: Regex = Regex::new(r"/spreadsheets/d/([a-zA-Z0-9_-]+)").unwrap();
}

const SHEETS_HOST_MARKER: &str = "docs.google.com/spreadsheets";

/// Column layout of the judges sheet
const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_EMAIL: usize = 2;
const COL_EXPERTISE: usize = 3;
const COL_STATUS: usize = 4;

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SheetValues {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(rename = "majorDimension", default)]
    pub major_dimension: Option<String>,
    /// Omitted by the API when the range is empty
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// Pull the spreadsheet id out of a pasted Google Sheets link.
pub fn extract_sheet_id(url: &str) -> Result<String> {
    if !url.contains(SHEETS_HOST_MARKER) {
        return Err(SharedError::InvalidUrl(url.to_string()));
    }
    SHEET_ID_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| SharedError::InvalidUrl(url.to_string()))
}

/// Build the values endpoint for `sheet_id` under `api_base`.
pub fn values_url(api_base: &str, sheet_id: &str, range: &str) -> String {
    format!(
        "{}/{}/values/{}",
        api_base.trim_end_matches('/'),
        sheet_id,
        urlencoding::encode(range)
    )
}

/// Checks the preconditions of an import in the order the operator sees
/// them: a token first, then a usable link. Returns the sheet id.
pub fn prepare_import(url: &str, access_token: Option<&str>) -> Result<String> {
    match access_token {
        Some(token) if !token.is_empty() => {}
        _ => return Err(SharedError::Unauthenticated),
    }
    extract_sheet_id(url)
}

fn cell_text(row: &[Value], index: usize) -> String {
    match row.get(index) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    }
}

fn parse_row(row: &[Value]) -> JudgeRecord {
    let expertise = cell_text(row, COL_EXPERTISE);
    let status_text = cell_text(row, COL_STATUS);
    let status = if status_text.is_empty() {
        JudgeStatus::default()
    } else {
        status_text.parse().unwrap_or_else(|_| {
            warn!("Unrecognized judge status '{}', using default", status_text);
            JudgeStatus::default()
        })
    };

    JudgeRecord {
        id_no: cell_text(row, COL_ID),
        name: cell_text(row, COL_NAME),
        email: cell_text(row, COL_EMAIL),
        expertise: (!expertise.is_empty()).then_some(expertise),
        status,
    }
}

/// Convert the sheet grid into judges. The first row is a header.
pub fn parse_judges(values: &SheetValues) -> Vec<JudgeRecord> {
    values
        .values
        .iter()
        .skip(1)
        .map(|row| parse_row(row))
        .collect()
}

/// Decode a raw response body into judges.
pub fn parse_judges_json(body: &str) -> Result<Vec<JudgeRecord>> {
    let values: SheetValues = serde_json::from_str(body)?;
    Ok(parse_judges(&values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RowStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    const SHEET_URL: &str =
        "https://docs.google.com/spreadsheets/d/1AbC-d_Ef23/edit#gid=0";

    #[test]
    fn test_extract_sheet_id() {
        assert_eq!(extract_sheet_id(SHEET_URL).unwrap(), "1AbC-d_Ef23");
    }

    #[test_case("https://example.com/spreadsheets/d/abc" ; "foreign host")]
    #[test_case("https://docs.google.com/spreadsheets/u/0/" ; "no sheet id")]
    #[test_case("" ; "empty")]
    fn test_extract_sheet_id_rejects(url: &str) {
        assert_eq!(extract_sheet_id(url), Err(SharedError::InvalidUrl(url.to_string())));
    }

    #[test]
    fn test_missing_token_is_reported_before_bad_url() {
        assert_eq!(prepare_import("not a url", None), Err(SharedError::Unauthenticated));
        assert_eq!(prepare_import("not a url", Some("")), Err(SharedError::Unauthenticated));
        assert!(matches!(prepare_import("not a url", Some("tok")), Err(SharedError::InvalidUrl(_))));
        assert_eq!(prepare_import(SHEET_URL, Some("tok")).unwrap(), "1AbC-d_Ef23");
    }

    #[test]
    fn test_values_url_encodes_range() {
        assert_eq!(
            values_url("https://sheets.googleapis.com/v4/spreadsheets/", "abc", "Sheet1!A:E"),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/Sheet1%21A%3AE"
        );
    }

    #[test]
    fn test_parse_skips_header_and_fills_defaults() {
        let values: SheetValues = serde_json::from_value(json!({
            "range": "Sheet1!A1:E3",
            "majorDimension": "ROWS",
            "values": [
                ["ID", "Name", "Email", "Expertise", "Status"],
                ["J1", "Ada", "ada@x.com", "AI", "Unavailable"],
                ["J2", "Bo", "bo@x.com"]
            ]
        }))
        .unwrap();

        let judges = parse_judges(&values);

        assert_eq!(judges.len(), 2);
        assert_eq!(judges[0].expertise.as_deref(), Some("AI"));
        assert_eq!(judges[0].status, JudgeStatus::Unavailable);
        assert_eq!(judges[1].email, "bo@x.com");
        assert_eq!(judges[1].expertise, None);
        assert_eq!(judges[1].status, JudgeStatus::Assigned);
    }

    #[test]
    fn test_parse_unknown_status_falls_back_to_assigned() {
        let values = SheetValues {
            values: vec![
                vec![json!("header")],
                vec![json!(7), json!("Cy"), json!("cy@x.com"), json!(""), json!("On leave")],
            ],
            ..Default::default()
        };
        let judges = parse_judges(&values);
        assert_eq!(judges[0].id_no, "7");
        assert_eq!(judges[0].status, JudgeStatus::Assigned);
    }

    #[test]
    fn test_empty_sheet_body_yields_no_judges() {
        let judges = parse_judges_json(r#"{"range":"Sheet1!A1:E1","majorDimension":"ROWS"}"#).unwrap();
        assert!(judges.is_empty());
    }

    #[test]
    fn test_malformed_body_is_fetch_failure() {
        assert!(matches!(parse_judges_json("<html>"), Err(SharedError::FetchFailed(_))));
    }

    #[test]
    fn test_import_merge_drops_existing_emails() {
        let mut store: RowStore<JudgeRecord> = vec![JudgeRecord {
            email: "a@x.com".to_string(),
            ..Default::default()
        }]
        .into_iter()
        .collect();

        let imported = parse_judges_json(
            r#"{"values":[["id","name","email"],["1","A","a@x.com"],["2","B","b@x.com"]]}"#,
        )
        .unwrap();
        let appended = store.extend_unique(imported);

        assert_eq!(appended, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_at(1).unwrap().record.email, "b@x.com");
    }
}
