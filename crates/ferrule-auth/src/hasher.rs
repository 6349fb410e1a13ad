//! Password hashers

use crate::{AuthError, AuthResult};
use ferrule_config::Config;

#[cfg(feature = "argon2")]
use argon2::{
    password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2,
};
#[cfg(feature = "argon2")]
use rand::thread_rng;

use bcrypt::{hash, verify, DEFAULT_COST};

/// Config key selecting the hashing algorithm
pub const HASH_DRIVER_KEY: &str = "HASH_DRIVER";
/// Config key for the bcrypt cost factor
pub const BCRYPT_COST_KEY: &str = "BCRYPT_COST";
/// Config keys for the Argon2 parameters
pub const ARGON2_MEMORY_COST_KEY: &str = "ARGON2_MEMORY_COST";
pub const ARGON2_TIME_COST_KEY: &str = "ARGON2_TIME_COST";
pub const ARGON2_PARALLELISM_KEY: &str = "ARGON2_PARALLELISM";

/// Password hasher trait for different hashing algorithms
pub trait PasswordHasher: Send + Sync {
    /// Hash a password
    fn hash_password(&self, password: &str) -> AuthResult<String>;

    /// Verify a password against its hash
    fn verify_password(&self, password: &str, hash: &str) -> AuthResult<bool>;

    /// Get the hasher name
    fn hasher_name(&self) -> &str;
}

/// Argon2id password hasher
#[cfg(feature = "argon2")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Hasher {
    memory_cost: u32,
    time_cost: u32,
    parallelism: u32,
}

#[cfg(feature = "argon2")]
impl Argon2Hasher {
    /// Create a new Argon2 hasher with custom parameters
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    /// Create an Argon2 hasher optimized for production
    pub fn production() -> Self {
        Self::new(65536, 4, 4)
    }

    /// Create an Argon2 hasher optimized for development (faster)
    pub fn development() -> Self {
        Self::new(4096, 2, 2)
    }

    fn argon2(&self) -> AuthResult<Argon2<'static>> {
        let params = argon2::Params::new(self.memory_cost, self.time_cost, self.parallelism, None)?;
        Ok(Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params))
    }
}

#[cfg(feature = "argon2")]
impl Default for Argon2Hasher {
    fn default() -> Self {
        // 64 MB, 3 iterations, 4 lanes
        Self::new(65536, 3, 4)
    }
}

#[cfg(feature = "argon2")]
impl PasswordHasher for Argon2Hasher {
    fn hash_password(&self, password: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut thread_rng());
        let password_hash = self.argon2()?.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    fn verify_password(&self, password: &str, hash: &str) -> AuthResult<bool> {
        let parsed_hash = PasswordHash::new(hash)?;

        match self.argon2()?.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    fn hasher_name(&self) -> &str {
        "argon2"
    }
}

/// bcrypt password hasher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a new bcrypt hasher with custom cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Create a bcrypt hasher optimized for production
    pub fn production() -> Self {
        Self { cost: 12 }
    }

    /// Create a bcrypt hasher optimized for development (faster)
    pub fn development() -> Self {
        Self { cost: 4 }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> AuthResult<String> {
        hash(password, self.cost).map_err(AuthError::from)
    }

    fn verify_password(&self, password: &str, hash: &str) -> AuthResult<bool> {
        verify(password, hash).map_err(AuthError::from)
    }

    fn hasher_name(&self) -> &str {
        "bcrypt"
    }
}

/// Password hasher factory for creating different hashers
pub struct PasswordHasherFactory;

impl PasswordHasherFactory {
    /// Create a hasher by algorithm name with its default parameters
    pub fn create_hasher(algorithm: &str) -> AuthResult<Box<dyn PasswordHasher>> {
        match algorithm {
            "bcrypt" => Ok(Box::new(BcryptHasher::default())),
            #[cfg(feature = "argon2")]
            "argon2" => Ok(Box::new(Argon2Hasher::default())),
            _ => Err(unknown_algorithm(algorithm)),
        }
    }

    /// Create a hasher from configuration.
    ///
    /// `HASH_DRIVER` picks the algorithm and defaults to bcrypt. Unset cost
    /// keys keep the algorithm's defaults.
    pub fn from_config(config: &Config) -> AuthResult<Box<dyn PasswordHasher>> {
        let algorithm = config.get_or(HASH_DRIVER_KEY, "bcrypt");
        tracing::debug!(algorithm = %algorithm, "Creating password hasher from configuration");

        match algorithm {
            "bcrypt" => {
                let cost = config.get_parsed(BCRYPT_COST_KEY)?.unwrap_or(DEFAULT_COST);
                Ok(Box::new(BcryptHasher::new(cost)))
            }
            #[cfg(feature = "argon2")]
            "argon2" => {
                let defaults = Argon2Hasher::default();
                let memory_cost = config
                    .get_parsed(ARGON2_MEMORY_COST_KEY)?
                    .unwrap_or(defaults.memory_cost);
                let time_cost = config
                    .get_parsed(ARGON2_TIME_COST_KEY)?
                    .unwrap_or(defaults.time_cost);
                let parallelism = config
                    .get_parsed(ARGON2_PARALLELISM_KEY)?
                    .unwrap_or(defaults.parallelism);

                Ok(Box::new(Argon2Hasher::new(memory_cost, time_cost, parallelism)))
            }
            other => Err(unknown_algorithm(other)),
        }
    }

    /// Create the default hasher (bcrypt)
    pub fn default_hasher() -> Box<dyn PasswordHasher> {
        Box::new(BcryptHasher::default())
    }
}

fn unknown_algorithm(algorithm: &str) -> AuthError {
    AuthError::config_error(format!(
        "Unknown password hashing algorithm: {} (or feature not enabled)",
        algorithm
    ))
}

/// Hash a password with bcrypt at the default cost
pub fn make(password: &str) -> AuthResult<String> {
    BcryptHasher::default().hash_password(password)
}

/// Check a password against a bcrypt hash. Malformed hashes never match.
pub fn check(password: &str, hash: &str) -> bool {
    BcryptHasher::default()
        .verify_password(password, hash)
        .unwrap_or_else(|err| {
            tracing::debug!(error = %err, "Password hash could not be verified");
            false
        })
}
