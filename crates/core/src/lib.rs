//! Domain logic for the Collab projects API.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` crate
//! builds its row models on [`types`], and the `api` crate runs submissions
//! through [`validation`] and responses through [`sanitize`].

pub mod error;
pub mod naming;
pub mod roles;
pub mod sanitize;
pub mod types;
pub mod validation;
