//! # ferrule-auth
//!
//! Password hashing. bcrypt is always available and backs [`make`] and
//! [`check`]; Argon2id is available behind the `argon2` feature.

pub mod error;
pub mod hasher;

pub use error::{AuthError, AuthResult};
pub use hasher::{check, make, BcryptHasher, PasswordHasher, PasswordHasherFactory};

#[cfg(feature = "argon2")]
pub use hasher::Argon2Hasher;
