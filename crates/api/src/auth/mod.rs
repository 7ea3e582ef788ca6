//! Authentication primitives.
//!
//! - [`jwt`] -- bearer access-token generation and validation.
//!
//! Accounts, passwords and token issuance for end users live in the account
//! service; this crate only verifies the tokens it signs.

pub mod jwt;
