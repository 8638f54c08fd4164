use super::RemoteRequestError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform `{success, data, message}` shape every X-Booker endpoint responds with.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Usually a boolean, but judged loosely like `data`.
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub data: Option<Value>,
    /// Either a string or, for validation failures, a list of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    /// Some deployments echo the HTTP status back within the body.
    #[serde(
        rename = "statusCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<Value>,
}

impl ApiResponse {
    /// Whether the envelope reports success, ignoring what `data` holds.
    pub fn succeeded(&self) -> bool {
        is_truthy(&self.success)
    }

    /// Passes the envelope through only if it succeeded with non-empty data.
    ///
    /// A `true` success flag alone isn't enough: empty data is a failure too.
    pub fn ensure_success(self) -> Result<Self, RemoteRequestError> {
        let has_data = self.data.as_ref().is_some_and(is_truthy);
        if self.succeeded() && has_data {
            Ok(self)
        } else {
            Err(RemoteRequestError::rejected(self.message))
        }
    }

    /// Extracts a token, either the bare `data` string or `data.<field>`.
    pub fn into_token(self, field: &str) -> Result<String, RemoteRequestError> {
        let data = self.ensure_success()?.data.unwrap_or_default();
        let token = match &data {
            Value::String(token) => Some(token.clone()),
            Value::Object(object) => object
                .get(field)
                .and_then(Value::as_str)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            _ => None,
        };
        token.ok_or(RemoteRequestError::UnexpectedPayload(data))
    }
}

/// Loose truthiness, as the service's own clients judge `data`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> ApiResponse {
        serde_json::from_value(body).expect("envelope should parse")
    }

    #[test]
    fn bare_string_data_is_the_token() {
        let envelope = parse(json!({"success": true, "data": "R"}));
        assert_eq!(envelope.into_token("refreshToken").unwrap(), "R");
    }

    #[test]
    fn token_can_be_nested_under_its_field() {
        let envelope = parse(json!({"success": true, "data": {"accessToken": "A"}}));
        assert_eq!(envelope.into_token("accessToken").unwrap(), "A");
    }

    #[test]
    fn object_without_the_field_is_unexpected() {
        let envelope = parse(json!({"success": true, "data": {"other": "A"}}));
        assert!(matches!(
            envelope.into_token("accessToken"),
            Err(RemoteRequestError::UnexpectedPayload(_))
        ));
    }

    #[test]
    fn failure_carries_the_message() {
        let envelope = parse(json!({"success": false, "message": "bad client"}));
        let error = envelope.ensure_success().unwrap_err();
        assert_eq!(error.to_string(), "bad client");
    }

    #[test]
    fn falsy_data_fails_despite_success() {
        for data in [json!(""), json!(null), json!(0), json!(false), json!([]), json!({})] {
            let envelope = parse(json!({"success": true, "data": data, "message": "empty"}));
            assert!(
                matches!(envelope.ensure_success(), Err(RemoteRequestError::Rejected(ref m)) if m == "empty"),
                "data {data} should be rejected"
            );
        }
    }

    #[test]
    fn missing_fields_mean_failure() {
        let envelope = parse(json!({}));
        assert!(!envelope.succeeded());
        assert!(envelope.ensure_success().is_err());
    }

    #[test]
    fn status_code_is_kept_when_present() {
        let envelope = parse(json!({"statusCode": 200, "success": true, "data": {"id": "org1"}}));
        assert_eq!(envelope.status_code, Some(json!(200)));
        assert!(envelope.ensure_success().is_ok());
    }

    #[test]
    fn unusual_status_codes_do_not_break_parsing() {
        for status_code in [json!("OK"), json!(70000), json!(null)] {
            let envelope = parse(json!({
                "statusCode": status_code,
                "success": true,
                "data": {"id": "org1"}
            }));
            let envelope = envelope.ensure_success().unwrap();
            assert_eq!(envelope.data, Some(json!({"id": "org1"})));
        }
    }

    #[test]
    fn validation_messages_are_carried_into_the_rejection() {
        let envelope = parse(json!({
            "statusCode": 400,
            "success": false,
            "message": ["organization-id must be a UUID"]
        }));
        let error = envelope.ensure_success().unwrap_err();
        assert!(matches!(error, RemoteRequestError::Rejected(_)));
        assert!(error.to_string().contains("organization-id must be a UUID"));
    }

    #[test]
    fn success_flag_is_judged_loosely() {
        let envelope = parse(json!({"success": 1, "data": "R"}));
        assert!(envelope.succeeded());
        assert_eq!(envelope.into_token("refreshToken").unwrap(), "R");

        for success in [json!(0), json!(""), json!(null)] {
            let envelope = parse(json!({"success": success, "data": "R", "message": "nope"}));
            assert_eq!(envelope.ensure_success().unwrap_err().to_string(), "nope");
        }
    }
}
