use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use crate::domain::services::claim_service::ClaimReader;

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    sub: Option<String>,
}

/// Reads the identity claim out of an HS256-signed token using the secret
/// shared with the identity service. Prefers the `email` claim and falls
/// back to `sub`.
#[derive(Clone)]
pub struct JwtClaimReader {
    secret: String,
}

impl JwtClaimReader {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }
}

impl ClaimReader for JwtClaimReader {
    fn extract_identity(&self, token: &str) -> Option<String> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        let data = match decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256)) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("failed to extract identity from token: {err}");
                return None;
            }
        };
        data.claims
            .email
            .filter(|email| !email.trim().is_empty())
            .or_else(|| data.claims.sub.filter(|sub| !sub.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    const SECRET: &str = "testsecret";

    fn token(claims: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn exp() -> i64 {
        (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp()
    }

    #[test]
    fn prefers_email_claim() {
        let reader = JwtClaimReader::new(SECRET.to_string());
        let token = token(json!({"email": "a@x.com", "sub": "subject", "exp": exp()}));
        assert_eq!(reader.extract_identity(&token), Some("a@x.com".to_string()));
    }

    #[test]
    fn falls_back_to_subject_when_email_missing_or_blank() {
        let reader = JwtClaimReader::new(SECRET.to_string());
        let token_without_email = token(json!({"sub": "a@x.com", "exp": exp()}));
        assert_eq!(
            reader.extract_identity(&token_without_email),
            Some("a@x.com".to_string())
        );

        let token_with_blank_email = token(json!({"email": " ", "sub": "a@x.com", "exp": exp()}));
        assert_eq!(
            reader.extract_identity(&token_with_blank_email),
            Some("a@x.com".to_string())
        );
    }

    #[test]
    fn returns_none_when_no_usable_claim() {
        let reader = JwtClaimReader::new(SECRET.to_string());
        let token = token(json!({"exp": exp()}));
        assert_eq!(reader.extract_identity(&token), None);
    }

    #[test]
    fn returns_none_for_garbage_token() {
        let reader = JwtClaimReader::new(SECRET.to_string());
        assert_eq!(reader.extract_identity("not-a-jwt"), None);
    }

    #[test]
    fn returns_none_for_wrong_signature() {
        let reader = JwtClaimReader::new("othersecret".to_string());
        let token = token(json!({"email": "a@x.com", "exp": exp()}));
        assert_eq!(reader.extract_identity(&token), None);
    }
}
