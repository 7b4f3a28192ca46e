use crate::db::User;
use crate::types::{AppError, Claims, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm as HashAlgorithm, Argon2, Params, Version,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Authentication service for password hashing and token issuance.
///
/// Hashes passwords with Argon2id and signs claims with HS256. The signing
/// secret and the hashing work factor are injected at construction - there
/// is no ambient configuration, and neither changes for the lifetime of the
/// process.
pub struct AuthService {
    jwt_secret: String,
    jwt_expiry: i64,
    hash_params: Params,
}

impl AuthService {
    /// Creates a new AuthService.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for signing tokens (should be at least 32 chars)
    /// * `jwt_expiry` - Token validity in seconds
    /// * `hash_params` - Argon2id work factor (memory, iterations, parallelism)
    pub fn new(jwt_secret: String, jwt_expiry: i64, hash_params: Params) -> Self {
        Self {
            jwt_secret,
            jwt_expiry,
            hash_params,
        }
    }

    fn hasher(&self) -> Argon2<'_> {
        Argon2::new(
            HashAlgorithm::Argon2id,
            Version::V0x13,
            self.hash_params.clone(),
        )
    }

    /// Hashes a password using Argon2id with the configured work factor.
    ///
    /// Returns a PHC-formatted hash string with an embedded random salt.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.hasher()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    /// Verifies a password against a stored PHC hash.
    ///
    /// The hash string carries its own salt and parameters, so verification
    /// works regardless of the currently configured work factor. A stored
    /// hash that fails to parse is data corruption, not a bad password.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid stored password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Issues a signed token for a stored user record.
    ///
    /// The claims carry the numeric user id as subject plus username and
    /// role; expiry is absolute, issuance time plus the configured validity.
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role_name: user.role_name.clone(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::seconds(self.jwt_expiry)).timestamp() as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token's signature and expiry, returning the claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: 1,
            username: "anna".to_string(),
            password_hash: String::new(),
            role_name: "angel".to_string(),
            created_at: 0,
        }
    }

    fn create_test_service() -> AuthService {
        AuthService::new(
            "test-secret-key-that-is-at-least-32-chars".to_string(),
            86400, // 24 hours
            // minimal work factor, hashing speed matters more than strength here
            Params::new(8, 1, 1, None).expect("valid params"),
        )
    }

    #[test]
    fn test_password_hashing() {
        let service = create_test_service();
        let password = "test_password_123";

        let hash = service
            .hash_password(password)
            .expect("should hash password");

        // Hash should not equal the original password
        assert_ne!(hash, password);

        // Hash should be in PHC format (starts with $argon2)
        assert!(hash.starts_with("$argon2"), "hash should be in PHC format");
    }

    #[test]
    fn test_same_password_different_hashes() {
        let service = create_test_service();

        let hash1 = service.hash_password("1234").expect("should hash");
        let hash2 = service.hash_password("1234").expect("should hash");

        // Per-hash random salt
        assert_ne!(hash1, hash2, "salting should make hashes differ");
    }

    #[test]
    fn test_password_verification_success() {
        let service = create_test_service();
        let password = "secure_password_456";

        let hash = service
            .hash_password(password)
            .expect("should hash password");
        let is_valid = service
            .verify_password(password, &hash)
            .expect("should verify");

        assert!(is_valid, "correct password should verify successfully");
    }

    #[test]
    fn test_password_verification_failure() {
        let service = create_test_service();

        let hash = service
            .hash_password("correct_password")
            .expect("should hash password");
        let is_valid = service
            .verify_password("wrong_password", &hash)
            .expect("should verify");

        assert!(!is_valid, "wrong password should fail verification");
    }

    #[test]
    fn test_malformed_stored_hash_is_an_error() {
        let service = create_test_service();

        let result = service.verify_password("whatever", "not-a-phc-string");

        assert!(result.is_err(), "corrupt hash should surface as an error");
    }

    #[test]
    fn test_token_roundtrip() {
        let service = create_test_service();

        let token = service
            .generate_token(&test_user())
            .expect("should generate token");
        let claims = service.verify_token(&token).expect("should verify token");

        assert_eq!(claims.sub, 1);
        assert_eq!(claims.username, "anna");
        assert_eq!(claims.role_name, "angel");
    }

    #[test]
    fn test_token_expires_in_configured_window() {
        let service = create_test_service();

        let token = service.generate_token(&test_user()).expect("should generate");
        let claims = service.verify_token(&token).expect("should verify");

        let now = Utc::now().timestamp() as usize;
        assert!(
            claims.iat <= now && claims.iat >= now - 5,
            "iat should be current timestamp"
        );
        assert_eq!(
            claims.exp,
            claims.iat + 86400,
            "exp should be exactly iat + 24 hours"
        );
    }

    #[test]
    fn test_token_verification_invalid_token() {
        let service = create_test_service();

        let result = service.verify_token("invalid.token.here");

        assert!(result.is_err(), "invalid token should fail verification");
    }

    #[test]
    fn test_token_verification_wrong_secret() {
        let params = Params::new(8, 1, 1, None).expect("valid params");
        let service1 = AuthService::new(
            "secret-one-that-is-32-chars-long".to_string(),
            86400,
            params.clone(),
        );
        let service2 = AuthService::new(
            "secret-two-that-is-32-chars-long".to_string(),
            86400,
            params,
        );

        let token = service1
            .generate_token(&test_user())
            .expect("should generate");
        let result = service2.verify_token(&token);

        assert!(result.is_err(), "token from different secret should fail");
    }

    #[test]
    fn test_tampered_payload_fails_verification() {
        let service = create_test_service();

        let token = service.generate_token(&test_user()).expect("should generate");

        // Swap the payload segment for one claiming a different role
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        let other = service
            .generate_token(&User {
                role_name: "admin".to_string(),
                ..test_user()
            })
            .expect("should generate");
        let forged_payload = other.split('.').nth(1).expect("payload segment");
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(
            service.verify_token(&tampered).is_err(),
            "tampered payload must fail signature validation"
        );
    }
}
