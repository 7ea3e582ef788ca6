//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod project_repo;
pub mod request_repo;
pub mod user_repo;
pub mod vacancy_repo;

pub use project_repo::ProjectRepo;
pub use request_repo::RequestRepo;
pub use user_repo::UserRepo;
pub use vacancy_repo::VacancyRepo;
