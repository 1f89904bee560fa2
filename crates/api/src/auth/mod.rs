//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing of user passwords before storage.
//! - [`jwt`] -- access-token issuance and validation.

pub mod jwt;
pub mod password;
