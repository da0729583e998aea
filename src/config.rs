//! Configuration types.

use secrecy::SecretString;

/// Fallback signing secret for local development runs.
const DEV_JWT_SECRET: &str = "mysecretkey";

/// Argon2 cost parameters for credential hashing.
#[derive(Debug, Clone)]
pub struct HashingParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of iterations (time cost).
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// TCP port the HTTP server binds to.
    pub port: u16,
    /// Process-wide secret used to sign tokens.
    pub jwt_secret: SecretString,
    /// Credential hashing cost parameters.
    pub hashing: HashingParams,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            jwt_secret: SecretString::from(DEV_JWT_SECRET),
            hashing: HashingParams::default(),
        }
    }
}

impl ServiceConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults where unset.
    ///
    /// - `HOURSKILL_PORT` — listen port (default 3000).
    /// - `HOURSKILL_JWT_SECRET` — token signing secret. Falls back to a
    ///   well-known development value with a warning.
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("HOURSKILL_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let jwt_secret = match std::env::var("HOURSKILL_JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => SecretString::from(secret),
            _ => {
                tracing::warn!(
                    "HOURSKILL_JWT_SECRET not set, using the development secret"
                );
                SecretString::from(DEV_JWT_SECRET)
            }
        };

        Self {
            port,
            jwt_secret,
            hashing: HashingParams::default(),
        }
    }
}
