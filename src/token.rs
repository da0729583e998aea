//! Token issuance — signed, time-bounded claim sets minted at login.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::onboarding::model::User;

/// Fixed token lifetime.
const TOKEN_TTL_HOURS: i64 = 1;

/// Decoded claim set carried by an issued token.
///
/// Claims snapshot the directory's state at issuance time; downstream
/// consumers rely on the exact field derivations, so they are part of the
/// issuer's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: u64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// True iff survey answers are present on the record.
    #[serde(rename = "surveyCompleted")]
    pub survey_completed: bool,
    /// Stored score, or 0 before survey submission.
    pub score: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Signs claim sets with the process-wide secret.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: SecretString,
}

impl TokenIssuer {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Mint a token for a user, expiring one hour from now.
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(TOKEN_TTL_HOURS);

        let claims = Claims {
            id: user.id,
            full_name: user.full_name.clone(),
            avatar_url: user.avatar_url.clone(),
            role: user.role.clone(),
            survey_completed: user.survey_completed(),
            score: user.score.unwrap_or(0),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|err| TokenError::Encode(err.to_string()))
    }

    /// Decode and validate a token, returning its claims.
    ///
    /// Protected routes are a consumer concern; this exists so consumers
    /// (and tests) can read the claim set back.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map_err(|err| TokenError::Decode(err.to_string()))?;
        Ok(data.claims)
    }
}
