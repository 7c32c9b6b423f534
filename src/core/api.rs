use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{PhayaoError, Result};


/// Decoded `{success, data, total, message}` envelope returned by the
/// portal's REST endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApiResponse<T> {
    Success {
        data: T,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        total: Option<u64>,
    },
    Failure {
        message: String,
    },
}

impl<T: DeserializeOwned> ApiResponse<T> {

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut body) = value else {
            return Err(PhayaoError::Validation(
                "API response is not a JSON object".to_string(),
            ));
        };

        let success = body
            .get("success")
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                PhayaoError::Validation("API response has no boolean `success` field".to_string())
            })?;

        if !success {
            let message = body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            return Ok(Self::Failure { message });
        }

        let total = match body.get("total") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_u64().ok_or_else(|| {
                PhayaoError::Validation(format!("API `total` is not a count: {}", v))
            })?),
        };
        let data = serde_json::from_value(body.remove("data").unwrap_or(Value::Null))?;

        Ok(Self::Success { data, total })
    }


    pub fn from_str(raw: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(raw)?)
    }
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }


    pub fn into_result(self) -> Result<(T, Option<u64>)> {
        match self {
            Self::Success { data, total } => Ok((data, total)),
            Self::Failure { message } => Err(PhayaoError::api(message, None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Listing {
        id: u32,
        title: String,
    }

    #[test]
    fn test_success_with_total() {
        let resp: ApiResponse<Vec<Listing>> = ApiResponse::from_value(json!({
            "success": true,
            "data": [{"id": 1, "title": "มะม่วง"}],
            "total": 12
        }))
        .unwrap();

        let (data, total) = resp.into_result().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].title, "มะม่วง");
        assert_eq!(total, Some(12));
    }

    #[test]
    fn test_failure_message() {
        let resp: ApiResponse<Vec<Listing>> =
            ApiResponse::from_str(r#"{"success": false, "message": "Unauthorized"}"#).unwrap();
        assert!(!resp.is_success());
        match resp.into_result() {
            Err(PhayaoError::Api { message, .. }) => assert_eq!(message, "Unauthorized"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_failure_without_message() {
        let resp: ApiResponse<()> = ApiResponse::from_value(json!({"success": false})).unwrap();
        assert_eq!(
            resp,
            ApiResponse::Failure {
                message: "Unknown error".to_string()
            }
        );
    }

    #[test]
    fn test_missing_success_is_rejected() {
        let resp = ApiResponse::<Vec<Listing>>::from_value(json!({"data": []}));
        assert!(matches!(resp, Err(PhayaoError::Validation(_))));
    }

    #[test]
    fn test_data_shape_mismatch_is_rejected() {
        let resp = ApiResponse::<Vec<Listing>>::from_value(json!({
            "success": true,
            "data": {"id": "x"}
        }));
        assert!(matches!(resp, Err(PhayaoError::Serialization(_))));
    }

    #[test]
    fn test_success_without_data() {
        let resp: ApiResponse<Option<Listing>> =
            ApiResponse::from_value(json!({"success": true})).unwrap();
        assert_eq!(
            resp,
            ApiResponse::Success {
                data: None,
                total: None
            }
        );
    }
}
