//! Error types for the accounts service.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Onboarding(#[from] OnboardingError),

    #[error("Hashing error: {0}")]
    Hash(#[from] HashError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

/// Client-input failures of the onboarding flow.
///
/// Every variant maps to a 400 response whose `message` field is the
/// variant's display text. Each condition keeps a distinct message so
/// clients can tell failures apart; the wording itself is not a contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Password must be at least 8 characters")]
    WeakPassword,

    #[error("Password confirmation does not match")]
    PasswordMismatch,

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("Email does not exist")]
    UnknownEmail,

    #[error("Incorrect password")]
    InvalidCredentials,

    #[error("User not found")]
    NotFound,
}

/// Directory mutation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("email already present in the directory")]
    DuplicateEmail,

    #[error("no record for the given email")]
    NotFound,
}

impl From<DirectoryError> for OnboardingError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::DuplicateEmail => OnboardingError::DuplicateEmail,
            DirectoryError::NotFound => OnboardingError::NotFound,
        }
    }
}

impl From<DirectoryError> for Error {
    fn from(err: DirectoryError) -> Self {
        Error::Onboarding(err.into())
    }
}

/// Credential hashing errors.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("Failed to derive digest: {0}")]
    Derive(String),

    #[error("Stored digest is malformed: {0}")]
    MalformedDigest(String),

    #[error("Hashing task failed: {0}")]
    TaskFailed(String),
}

/// Token issuance/decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    Encode(String),

    #[error("Failed to decode token: {0}")]
    Decode(String),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
