//! HTTP calls to the remote certificate service.
//!
//! Both operations are explicit async functions returning either the value
//! the UI needs or the user-facing message to show; callers never inspect a
//! response object. Neither call is retried and no local timeout is imposed:
//! the future resolves when the network does.
//!
//! With the `simulated-api` feature both calls are replaced by fixed-delay
//! local futures, which is how the page is exercised without the remote
//! service.

use common::model::certificate::{CertificateRequest, ErrorBody, ValidateResponse};

/// Remote origin serving `/validate` and `/download/{id}`.
pub const API_BASE: &str = "https://aurora-production-de38.up.railway.app";

/// Fallback shown when `POST /validate` fails without a usable `detail`.
const MSG_VALIDATE_FAILED: &str = "Erro ao validar/gerar certificado";
/// Shown when a 2xx validate response carries no token.
const MSG_MISSING_ID: &str = "API não retornou download_id";
/// Fallback shown when the download request fails without a usable `detail`.
const MSG_DOWNLOAD_FAILED: &str = "Erro ao baixar certificado";

/// Submits the trimmed form fields and returns the download token issued by
/// the service.
#[cfg(not(feature = "simulated-api"))]
pub async fn request_certificate(form: &CertificateRequest) -> Result<String, String> {
    use gloo_net::http::Request;

    let response = Request::post(&format!("{}/validate", API_BASE))
        .json(form)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;

    let body = response.text().await.unwrap_or_default();
    if !response.ok() {
        return Err(error_detail(&body, MSG_VALIDATE_FAILED));
    }
    extract_download_id(&body)
}

/// Retrieves the certificate bundle for a previously issued token. The body
/// is opaque to the client; it is handed to the browser's save flow as-is.
#[cfg(not(feature = "simulated-api"))]
pub async fn fetch_certificate(download_id: &str) -> Result<Vec<u8>, String> {
    use gloo_net::http::Request;

    let encoded = String::from(js_sys::encode_uri_component(download_id));
    let response = Request::get(&format!("{}/download/{}", API_BASE, encoded))
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_detail(&body, MSG_DOWNLOAD_FAILED));
    }
    response.binary().await.map_err(|err| err.to_string())
}

/// Local stand-in for `POST /validate`: resolves after a fixed delay with a
/// synthetic token, no network involved.
#[cfg(feature = "simulated-api")]
pub async fn request_certificate(_form: &CertificateRequest) -> Result<String, String> {
    gloo_timers::future::TimeoutFuture::new(800).await;
    Ok(format!("sim-{}", js_sys::Date::now() as u64))
}

/// Local stand-in for the download: a fixed delay and a placeholder bundle.
#[cfg(feature = "simulated-api")]
pub async fn fetch_certificate(_download_id: &str) -> Result<Vec<u8>, String> {
    gloo_timers::future::TimeoutFuture::new(800).await;
    Ok(b"certificado de teste - conteudo simulado".to_vec())
}

/// Extracts the token from a 2xx validate body. An unparseable body and an
/// absent or empty `download_id` are the same failure: the service answered
/// success without issuing a token.
fn extract_download_id(body: &str) -> Result<String, String> {
    match serde_json::from_str::<ValidateResponse>(body) {
        Ok(parsed) if !parsed.download_id.is_empty() => Ok(parsed.download_id),
        _ => Err(MSG_MISSING_ID.to_string()),
    }
}

/// Picks the service-provided `detail` out of a failure body when there is
/// one, else falls back to the fixed message.
fn error_detail(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.detail.is_empty() => parsed.detail,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_download_id_accepts_a_populated_body() {
        assert_eq!(
            extract_download_id(r#"{"download_id":"abc123"}"#),
            Ok("abc123".to_string())
        );
    }

    #[test]
    fn extract_download_id_rejects_missing_or_empty_ids() {
        assert_eq!(extract_download_id("{}"), Err(MSG_MISSING_ID.to_string()));
        assert_eq!(
            extract_download_id(r#"{"download_id":""}"#),
            Err(MSG_MISSING_ID.to_string())
        );
        assert_eq!(
            extract_download_id("not json"),
            Err(MSG_MISSING_ID.to_string())
        );
    }

    #[test]
    fn error_detail_prefers_the_service_message() {
        assert_eq!(
            error_detail(r#"{"detail":"quota exceeded"}"#, MSG_VALIDATE_FAILED),
            "quota exceeded"
        );
    }

    #[test]
    fn error_detail_falls_back_on_unusable_bodies() {
        assert_eq!(
            error_detail("<html>502</html>", MSG_DOWNLOAD_FAILED),
            MSG_DOWNLOAD_FAILED
        );
        assert_eq!(
            error_detail(r#"{"detail":""}"#, MSG_DOWNLOAD_FAILED),
            MSG_DOWNLOAD_FAILED
        );
        assert_eq!(error_detail("", MSG_VALIDATE_FAILED), MSG_VALIDATE_FAILED);
    }
}
