use serde::{Deserialize, Serialize};

/// Payload of `POST /validate`: the five contact-form fields exactly as the
/// user typed them (input masks included), trimmed of surrounding whitespace
/// only.
///
/// The lower-case Portuguese field names are part of the wire contract with
/// the certificate service and must not be renamed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CertificateRequest {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    pub endereco: String,
}

/// Success body of `POST /validate`.
///
/// `download_id` is the opaque token later exchanged for the certificate
/// bundle via `GET /download/{download_id}`. The service can answer 2xx with
/// a body that lacks the field; `default` keeps deserialization permissive so
/// the caller can treat an empty id as a malformed response instead of a
/// parse failure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidateResponse {
    #[serde(default)]
    pub download_id: String,
}

/// Failure body either endpoint may attach to a non-2xx status.
/// `detail`, when non-empty, is shown to the user verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_request_keeps_the_wire_field_names() {
        let request = CertificateRequest {
            nome: "Maria Silva".to_string(),
            email: "a@b.com".to_string(),
            telefone: "(11) 91234-5678".to_string(),
            cpf: "123.456.789-09".to_string(),
            endereco: "Rua Teste, 123".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for key in ["nome", "email", "telefone", "cpf", "endereco"] {
            assert!(object.contains_key(key), "missing field {key}");
        }
    }

    #[test]
    fn validate_response_parses_a_populated_body() {
        let parsed: ValidateResponse =
            serde_json::from_str(r#"{"download_id":"abc123"}"#).unwrap();
        assert_eq!(parsed.download_id, "abc123");
    }

    #[test]
    fn validate_response_tolerates_a_missing_id() {
        let parsed: ValidateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.download_id.is_empty());
    }

    #[test]
    fn error_body_tolerates_a_missing_detail() {
        let parsed: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.detail.is_empty());

        let parsed: ErrorBody =
            serde_json::from_str(r#"{"detail":"quota exceeded"}"#).unwrap();
        assert_eq!(parsed.detail, "quota exceeded");
    }
}
