//! Row models and insert DTOs.
//!
//! Each submodule holds a `FromRow` + `Serialize` struct matching a table
//! row and, where rows are inserted through a repository, a create DTO.

pub mod project;
pub mod user;
pub mod vacancy;
