//! Request extractors shared by handlers.
//!
//! - [`auth::AuthUser`] -- resolves the requesting user from a Bearer token.

pub mod auth;
