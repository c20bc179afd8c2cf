//! Envelope-aware HTTP helpers over `gloo-net`.
//!
//! Every backend response is an [`ApiResponse`]; these helpers unwrap it and
//! report failures as plain strings the UI can log.

use contracts::shared::api_response::ApiResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

/// Decide the outcome of a response from its status and parsed body
fn interpret<T>(
    ok: bool,
    status: u16,
    parsed: Result<ApiResponse<T>, String>,
) -> Result<Option<T>, String> {
    match parsed {
        Ok(envelope) if ok => envelope.into_result(),
        Ok(envelope) => match envelope.into_result() {
            Err(e) => Err(e),
            Ok(_) => Err(format!("HTTP {}", status)),
        },
        Err(e) if ok => Err(format!("Respuesta inválida del servidor: {}", e)),
        Err(_) => Err(format!("HTTP {}", status)),
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Option<T>, String> {
    let parsed = response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| e.to_string());
    interpret(response.ok(), response.status(), parsed)
}

/// GET `path` and return the envelope's `data`, which must be present
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope(response)
        .await?
        .ok_or_else(|| format!("Respuesta sin datos: {}", path))
}

pub async fn post_json<P: Serialize>(path: &str, payload: &P) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope::<serde_json::Value>(response).await.map(|_| ())
}

pub async fn put_json<P: Serialize>(path: &str, payload: &P) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope::<serde_json::Value>(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_envelope::<serde_json::Value>(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let out = interpret(true, 200, Ok(ApiResponse::ok(vec![1, 2])));
        assert_eq!(out, Ok(Some(vec![1, 2])));
    }

    #[test]
    fn test_unsuccessful_envelope_is_error() {
        let out: Result<Option<()>, String> =
            interpret(false, 400, Ok(ApiResponse::failure("El precio es requerido")));
        assert_eq!(out, Err("El precio es requerido".to_string()));

        let out: Result<Option<()>, String> =
            interpret(true, 200, Ok(ApiResponse::failure("fallo")));
        assert_eq!(out, Err("fallo".to_string()));
    }

    #[test]
    fn test_non_2xx_without_envelope() {
        let out: Result<Option<()>, String> = interpret(false, 502, Err("not json".into()));
        assert_eq!(out, Err("HTTP 502".to_string()));
    }

    #[test]
    fn test_non_2xx_with_success_flag_is_still_error() {
        let out = interpret(false, 500, Ok(ApiResponse::ok(1)));
        assert_eq!(out, Err("HTTP 500".to_string()));
    }
}
