//! OnboardingService — orchestrates register, login, role selection, and
//! survey submission over the directory, hasher, and token issuer.

use std::sync::Arc;

use crate::directory::Directory;
use crate::error::{OnboardingError, Result};
use crate::onboarding::model::{NewUser, User, avatar_url_for};
use crate::password::CredentialHasher;
use crate::survey::score_answers;
use crate::token::TokenIssuer;

/// Registration input, validated in order: completeness, password strength,
/// confirmation match, then email uniqueness.
#[derive(Debug, Clone)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Coordinates the onboarding flow.
///
/// Holds the directory behind `Arc<dyn Directory>` so tests can substitute
/// an isolated instance. Role selection and survey submission are
/// independent attributes: either can be set first, and re-submission
/// replaces the previous value.
pub struct OnboardingService {
    directory: Arc<dyn Directory>,
    hasher: CredentialHasher,
    issuer: TokenIssuer,
}

impl OnboardingService {
    pub fn new(
        directory: Arc<dyn Directory>,
        hasher: CredentialHasher,
        issuer: TokenIssuer,
    ) -> Self {
        Self {
            directory,
            hasher,
            issuer,
        }
    }

    /// Register a new user.
    ///
    /// The duplicate-email pre-check keeps the expensive hash off the
    /// failure path; the directory's own insert check closes the race
    /// between two concurrent registrations.
    pub async fn register(&self, registration: Registration) -> Result<User> {
        let Registration {
            full_name,
            email,
            password,
            confirm_password,
        } = registration;

        if full_name.is_empty()
            || email.is_empty()
            || password.is_empty()
            || confirm_password.is_empty()
        {
            return Err(OnboardingError::MissingFields.into());
        }
        if password.chars().count() < 8 {
            return Err(OnboardingError::WeakPassword.into());
        }
        if password != confirm_password {
            return Err(OnboardingError::PasswordMismatch.into());
        }
        if self.directory.find_by_email(&email).await.is_some() {
            return Err(OnboardingError::DuplicateEmail.into());
        }

        let password_digest = self.hasher.hash_offloaded(password).await?;
        let avatar_url = avatar_url_for(&full_name);
        let user = self
            .directory
            .insert(NewUser {
                full_name,
                email,
                password_digest,
                avatar_url,
            })
            .await?;

        tracing::info!(id = user.id, "registered user");
        Ok(user)
    }

    /// Authenticate and mint a token from the directory's current state.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let user = self
            .directory
            .find_by_email(email)
            .await
            .ok_or(OnboardingError::UnknownEmail)?;

        let verified = self
            .hasher
            .verify_offloaded(password.to_string(), user.password_digest.clone())
            .await?;
        if !verified {
            return Err(OnboardingError::InvalidCredentials.into());
        }

        let token = self.issuer.issue(&user)?;
        tracing::info!(id = user.id, "issued login token");
        Ok(token)
    }

    /// Set the user's role. Any value is accepted; re-selection overwrites.
    pub async fn select_role(&self, email: &str, role: String) -> Result<User> {
        let user = self.directory.update_role(email, role).await?;
        tracing::info!(id = user.id, "updated role");
        Ok(user)
    }

    /// Score and store the user's survey answers, returning the score.
    pub async fn submit_survey(&self, email: &str, answers: Vec<String>) -> Result<i64> {
        let score = score_answers(&answers);
        let user = self.directory.update_survey(email, answers, score).await?;
        tracing::info!(id = user.id, score, "stored survey");
        Ok(score)
    }
}
