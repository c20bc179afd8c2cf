use serde::{Deserialize, Serialize};

/// Uniform envelope wrapping every REST response
///
/// `data` is absent on deletes and on failures; `error` carries the
/// human-readable reason when `success` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Unwraps a successful envelope, turning `success: false` into its error text
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "Respuesta sin éxito del servidor".to_string()))
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without payload (used by deletes)
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(value, json!({"success": true, "data": [1, 2, 3]}));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::<()>::failure("Producto no encontrado")).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "error": "Producto no encontrado"})
        );
    }

    #[test]
    fn test_missing_data_parses_as_none() {
        let parsed: ApiResponse<Vec<i32>> =
            serde_json::from_value(json!({"success": true, "message": "ok"})).unwrap();
        assert_eq!(parsed.into_result().unwrap(), None);
    }

    #[test]
    fn test_into_result_reports_error_text() {
        let parsed: ApiResponse<Vec<i32>> =
            serde_json::from_value(json!({"success": false, "error": "boom"})).unwrap();
        assert_eq!(parsed.into_result().unwrap_err(), "boom");
    }
}
