//! Credential hashing — one-way, salted digests for stored passwords.
//!
//! Digests are Argon2id PHC strings. A fresh random salt is drawn per call,
//! so hashing the same plaintext twice yields different digests.
//! Verification parses the cost parameters back out of the stored digest and
//! compares in constant time.

use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::config::HashingParams;
use crate::error::HashError;

/// Derives and verifies password digests.
///
/// The argon2 work factor makes hashing the only latency-significant step in
/// the request path, so the async entry points run it on the blocking thread
/// pool rather than on the request's executor thread.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: HashingParams,
}

impl CredentialHasher {
    pub fn new(params: HashingParams) -> Self {
        Self { params }
    }

    fn build_argon2(&self) -> Result<Argon2<'static>, HashError> {
        let params = Params::new(
            self.params.memory_kib,
            self.params.iterations,
            self.params.parallelism,
            None,
        )
        .map_err(|err| HashError::Derive(err.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hash a plaintext password into a salted PHC-format digest.
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = self.build_argon2()?;
        let digest = argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| HashError::Derive(err.to_string()))?;
        Ok(digest.to_string())
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Never errs on a mismatch — only on a digest that does not parse as a
    /// PHC string, which indicates directory corruption rather than bad input.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|err| HashError::MalformedDigest(err.to_string()))?;
        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }

    /// Hash on the blocking thread pool.
    pub async fn hash_offloaded(&self, plaintext: String) -> Result<String, HashError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|err| HashError::TaskFailed(err.to_string()))?
    }

    /// Verify on the blocking thread pool.
    pub async fn verify_offloaded(
        &self,
        plaintext: String,
        digest: String,
    ) -> Result<bool, HashError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest))
            .await
            .map_err(|err| HashError::TaskFailed(err.to_string()))?
    }
}
