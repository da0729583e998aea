//! User record and derived profile fields.

/// Base URL of the avatar rendering service.
const AVATAR_BASE: &str = "https://ui-avatars.com/api/";

/// A user record, owned exclusively by the directory.
///
/// `role` and `survey_answers` start absent and are set (and freely
/// overwritten) by the onboarding steps. `score` is present exactly when
/// `survey_answers` is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Monotonically assigned at creation, never reused.
    pub id: u64,
    pub full_name: String,
    /// Unique directory key, case-sensitive as received.
    pub email: String,
    /// Salted one-way digest. The plaintext is never stored.
    pub password_digest: String,
    pub role: Option<String>,
    pub survey_answers: Option<Vec<String>>,
    pub score: Option<i64>,
    pub avatar_url: String,
}

impl User {
    /// Whether the user has submitted the onboarding survey.
    pub fn survey_completed(&self) -> bool {
        self.survey_answers.is_some()
    }
}

/// Candidate record for directory insertion; the directory assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_digest: String,
    pub avatar_url: String,
}

/// Derive the avatar URL for a full name.
///
/// Deterministic: the same name always yields the same URL.
pub fn avatar_url_for(full_name: &str) -> String {
    format!(
        "{AVATAR_BASE}?name={}&background=3b82f6&color=fff",
        urlencoding::encode(full_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_url_encodes_the_name() {
        let url = avatar_url_for("Ann B");
        assert_eq!(
            url,
            "https://ui-avatars.com/api/?name=Ann%20B&background=3b82f6&color=fff"
        );
    }

    #[test]
    fn avatar_url_is_deterministic() {
        assert_eq!(avatar_url_for("Trần An"), avatar_url_for("Trần An"));
    }

    #[test]
    fn survey_completed_tracks_answers() {
        let mut user = User {
            id: 1,
            full_name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password_digest: "$argon2id$stub".to_string(),
            role: None,
            survey_answers: None,
            score: None,
            avatar_url: avatar_url_for("Ann"),
        };
        assert!(!user.survey_completed());
        user.survey_answers = Some(vec!["ok".to_string()]);
        assert!(user.survey_completed());
    }
}
