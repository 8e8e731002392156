//! Role claim extraction from a JWT payload.
//!
//! The client never verifies the signature. The role is only used to decide
//! whether to show admin-only UI; the API enforces access itself.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde_json::Value;

pub const ADMIN_ROLE: &str = "admin";

/// base64url that accepts payloads with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Extract the `role` claim from a token, or `None` on any malformed input.
pub fn decode_role_claim(token: &str) -> Option<String> {
    let mut segments = token.split('.');
    let (_header, payload) = (segments.next()?, segments.next()?);

    let bytes = match PAYLOAD_ENGINE.decode(payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("Token payload is not base64url: {}", e);
            return None;
        }
    };
    let claims: Value = match serde_json::from_slice(&bytes) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("Token payload is not JSON: {}", e);
            return None;
        }
    };

    claims.get("role")?.as_str().map(str::to_string)
}

/// Whether the token claims the admin role.
pub fn is_admin(token: &str) -> bool {
    decode_role_claim(token).as_deref() == Some(ADMIN_ROLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

    fn token_with(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_role_claim() {
        let token = token_with(r#"{"sub":"u1","role":"admin"}"#);
        assert_eq!(decode_role_claim(&token).as_deref(), Some("admin"));
        assert!(is_admin(&token));

        let token = token_with(r#"{"sub":"u1","role":"user"}"#);
        assert_eq!(decode_role_claim(&token).as_deref(), Some("user"));
        assert!(!is_admin(&token));
    }

    #[test]
    fn test_padded_payload() {
        let token = format!("h.{}.s", URL_SAFE.encode(r#"{"role":"admin"}"#));
        assert!(is_admin(&token));
    }

    #[test]
    fn test_url_safe_alphabet() {
        // '?' and '>' encode to '/' and '+' in standard base64; url-safe uses '_' and '-'.
        let payload = r#"{"role":"admin","note":"??>>"}"#;
        let encoded = URL_SAFE_NO_PAD.encode(payload);
        assert!(encoded.contains('_') || encoded.contains('-'));
        assert!(is_admin(&format!("h.{encoded}.s")));
    }

    #[test]
    fn test_fails_closed() {
        let tokens = vec![
            String::new(),
            "no-dots-at-all".to_string(),
            "header.!!!not-base64!!!.sig".to_string(),
            token_with("not json"),
            token_with(r#"{"sub":"u1"}"#),
            token_with(r#"{"role":1}"#),
            token_with(r#"["role","admin"]"#),
        ];
        for token in &tokens {
            assert_eq!(decode_role_claim(token), None, "token {token:?}");
            assert!(!is_admin(token));
        }
    }
}
