use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::GatewayError,
    models::{profile::UserProfile, token::TokenSet},
};

pub const DEFAULT_ROLE: &str = "ROLE_USER";

/// Inbound registration request. Profile fields are optional as a block:
/// either all of them are supplied (full registration with profile) or none
/// of them (credentials-only registration).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl RegisterRequest {
    pub fn role(&self) -> &str {
        self.role
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_ROLE)
    }

    /// Validates the request and extracts the profile fields.
    ///
    /// Returns `Ok(None)` when no profile field is supplied (credentials-only
    /// registration) and `Ok(Some(_))` when all of them are. A partial set of
    /// profile fields is rejected, listing the missing ones.
    pub fn validate(&self) -> Result<Option<ProfileData>, GatewayError> {
        if self.login.trim().is_empty() {
            return Err(GatewayError::validation("Login is required"));
        }
        if self.password.trim().is_empty() {
            return Err(GatewayError::validation("Password is required"));
        }

        let first_name = self.first_name.as_deref().filter(|f| !f.trim().is_empty());
        let last_name = self.last_name.as_deref().filter(|l| !l.trim().is_empty());

        match (first_name, last_name, self.birth_date) {
            (None, None, None) => Ok(None),
            (Some(first_name), Some(last_name), Some(birth_date)) => {
                let profile = ProfileData {
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    birth_date,
                };
                profile.validate()?;
                Ok(Some(profile))
            }
            (first_name, last_name, birth_date) => {
                let mut missing = Vec::new();
                if first_name.is_none() {
                    missing.push("firstName");
                }
                if last_name.is_none() {
                    missing.push("lastName");
                }
                if birth_date.is_none() {
                    missing.push("birthDate");
                }
                Err(GatewayError::validation(format!(
                    "Missing required profile data fields: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// The validated profile triple sent to the profile service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

impl ProfileData {
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.first_name.trim().is_empty() {
            return Err(GatewayError::validation("First name is required"));
        }
        if self.last_name.trim().is_empty() {
            return Err(GatewayError::validation("Last name is required"));
        }
        if self.birth_date > Utc::now().date_naive() {
            return Err(GatewayError::validation("Birth date cannot be in the future"));
        }
        Ok(())
    }
}

/// Terminal success value of the registration saga, for both the
/// credentials-only path and the full path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterOutcome {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenSet>,
}

impl RegisterOutcome {
    pub fn credentials_only() -> Self {
        Self {
            message: "Credentials registered successfully. Please login to get tokens and create profile.".to_string(),
            user: None,
            tokens: None,
        }
    }

    pub fn with_profile(user: UserProfile, tokens: TokenSet) -> Self {
        Self {
            message: "User registered successfully with profile. Tokens included.".to_string(),
            user: Some(user),
            tokens: Some(tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(
        first_name: Option<&str>,
        last_name: Option<&str>,
        birth_date: Option<&str>,
    ) -> RegisterRequest {
        RegisterRequest {
            login: "a@x.com".to_string(),
            password: "p".to_string(),
            role: None,
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            birth_date: birth_date.map(|d| d.parse().unwrap()),
        }
    }

    #[test]
    fn no_profile_fields_is_credentials_only() {
        let profile = request(None, None, None).validate().unwrap();
        assert!(profile.is_none());
    }

    #[test]
    fn all_profile_fields_yield_profile_data() {
        let profile = request(Some("Ada"), Some("Lovelace"), Some("1990-12-10"))
            .validate()
            .unwrap()
            .unwrap();
        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.last_name, "Lovelace");
    }

    #[rstest]
    #[case(Some("Ada"), None, None, "lastName, birthDate")]
    #[case(Some("Ada"), Some("Lovelace"), None, "birthDate")]
    #[case(None, None, Some("1990-12-10"), "firstName, lastName")]
    #[case(Some("  "), Some("Lovelace"), Some("1990-12-10"), "firstName")]
    fn partial_profile_fields_are_rejected(
        #[case] first_name: Option<&str>,
        #[case] last_name: Option<&str>,
        #[case] birth_date: Option<&str>,
        #[case] expected_missing: &str,
    ) {
        let err = request(first_name, last_name, birth_date)
            .validate()
            .unwrap_err();
        match err {
            GatewayError::Validation(message) => assert!(message.contains(expected_missing)),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn future_birth_date_is_rejected() {
        let tomorrow = Utc::now().date_naive() + chrono::Days::new(1);
        let request = request(Some("Ada"), Some("Lovelace"), Some("1990-12-10"));
        let request = RegisterRequest {
            birth_date: Some(tomorrow),
            ..request
        };
        assert!(matches!(
            request.validate(),
            Err(GatewayError::Validation(_))
        ));
    }

    #[test]
    fn blank_login_is_rejected() {
        let mut req = request(None, None, None);
        req.login = " ".to_string();
        assert!(matches!(req.validate(), Err(GatewayError::Validation(_))));
    }

    #[test]
    fn role_defaults_to_standard_user() {
        assert_eq!(request(None, None, None).role(), DEFAULT_ROLE);
        let mut req = request(None, None, None);
        req.role = Some("ROLE_ADMIN".to_string());
        assert_eq!(req.role(), "ROLE_ADMIN");
    }
}
