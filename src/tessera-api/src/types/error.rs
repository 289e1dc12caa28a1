use serde::{Deserialize, Serialize};

/// Error envelope the API wraps failure responses in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

/// Error payload inside the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetail {
    /// HTTP status the server attached to the error
    pub status_code: Option<u16>,
    /// Server-side error class (e.g. `UnprocessableEntityError`)
    pub name: Option<String>,
    /// Human-readable error description
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_parses() {
        let json = r#"{
            "error": {
                "statusCode": 422,
                "name": "UnprocessableEntityError",
                "message": "Wallet address already exists"
            }
        }"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.status_code, Some(422));
        assert_eq!(body.error.name.as_deref(), Some("UnprocessableEntityError"));
    }

    #[test]
    fn test_error_envelope_tolerates_missing_fields() {
        let json = r#"{"error": {"message": "boom"}}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.name, None);
        assert_eq!(body.error.status_code, None);
        assert_eq!(body.error.message.as_deref(), Some("boom"));
    }
}
