//! JSON wire helpers for gateway payloads.

use crate::gateway::{GatewayError, GatewayResult};
use crate::model::attributes::VarDefMap;
use serde::Deserialize;
use serde_json::Value;

/// Error reply body emitted by the backend.
#[derive(Debug, Deserialize)]
struct ErrorReport {
    #[serde(rename = "additInfos", default)]
    addit_infos: Option<Value>,
}

/// Decodes the load-all body (`name -> attributes`).
pub fn decode_var_defs(body: &str) -> GatewayResult<VarDefMap> {
    serde_json::from_str(body).map_err(|err| GatewayError::InvalidPayload(err.to_string()))
}

/// Extracts `additInfos` from an error reply body.
///
/// String details are returned as-is; structured details are rendered as
/// compact JSON. Returns `None` for non-JSON bodies or a missing field.
pub fn error_detail(body: &str) -> Option<String> {
    let report = serde_json::from_str::<ErrorReport>(body).ok()?;
    match report.addit_infos? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Returns the text before the first newline.
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{decode_var_defs, error_detail, first_line};

    #[test]
    fn error_detail_reads_string_and_structured_infos() {
        assert_eq!(
            error_detail(r#"{"additInfos":"bad unit\nmore"}"#).as_deref(),
            Some("bad unit\nmore")
        );
        assert_eq!(
            error_detail(r#"{"additInfos":{"name":"x"}}"#).as_deref(),
            Some(r#"{"name":"x"}"#)
        );
        assert_eq!(error_detail(r#"{"message":"boom"}"#), None);
        assert_eq!(error_detail("<html>oops</html>"), None);
    }

    #[test]
    fn first_line_stops_at_newline() {
        assert_eq!(first_line("bad unit\nmore detail"), "bad unit");
        assert_eq!(first_line("single"), "single");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn decode_rejects_negative_threshold() {
        let err = decode_var_defs(r#"{"t": {"var_type": "x", "threshold": -1}}"#).unwrap_err();
        assert!(err.to_string().contains("invalid gateway payload"));
    }
}
