#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use collab_api::auth::jwt::{generate_access_token, JwtConfig};
use collab_api::config::ServerConfig;
use collab_api::router::build_app_router;
use collab_api::state::AppState;
use collab_core::types::DbId;
use collab_core::validation::ValidProject;
use collab_db::models::project::Project;
use collab_db::models::user::{CreateUser, User};
use collab_db::models::vacancy::{CreateVacancy, Vacancy};
use collab_db::repositories::{ProjectRepo, UserRepo, VacancyRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
        jwt: JwtConfig {
            secret: "collab-integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router, middleware included, on `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Sign a token for `user_id` with the test secret.
pub fn token_for(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// GET without credentials.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

/// POST a JSON body without credentials.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

/// POST a raw (possibly malformed) body with a JSON content type.
pub async fn post_raw_auth(app: Router, uri: &str, body: &'static str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Name of the stored project carrying markup in its text fields.
pub const MALICIOUS_NAME: &str = "<img src=x onerror=alert(1)>Malicious";
pub const MALICIOUS_DESCRIPTION: &str = r#"Naughty <script>alert("xss");</script>"#;

/// Seeded database state shared by the project API tests.
pub struct Fixture {
    /// Creator of `project` and `malicious`.
    pub owner: User,
    /// Creator of `other_project`; has a pending request on `project`.
    pub member: User,
    /// No relationship to any project.
    pub outsider: User,
    pub owner_token: String,
    pub member_token: String,
    pub outsider_token: String,
    pub project: Project,
    pub other_project: Project,
    pub malicious: Project,
    /// Vacancies on `project`, in id order. `malicious` has one vacancy with
    /// the same markup as its own text.
    pub vacancies: Vec<Vacancy>,
}

pub fn valid_project(name: &str, handle: &str, description: &str) -> ValidProject {
    ValidProject {
        name: name.to_string(),
        handle: handle.to_string(),
        description: description.to_string(),
        tags: vec!["rust".to_string(), "web".to_string()],
        live_url: Some("https://collab.example.com/".to_string()),
        trello_url: None,
        github_url: Some("https://github.com/collab/app".to_string()),
    }
}

pub async fn create_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            first_name: username.to_string(),
            last_name: "Tester".to_string(),
            email: Some(format!("{username}@test.com")),
        },
    )
    .await
    .expect("user creation should succeed")
}

pub async fn create_vacancy(pool: &PgPool, project_id: DbId, title: &str) -> Vacancy {
    VacancyRepo::create(
        pool,
        &CreateVacancy {
            project_id,
            title: title.to_string(),
            description: format!("{title} wanted"),
            skills: vec!["rust".to_string()],
            user_id: None,
        },
    )
    .await
    .expect("vacancy creation should succeed")
}

/// Seed users, projects, vacancies, a request and the project's activity
/// (post, chat, message, notification).
pub async fn seed(pool: &PgPool) -> Fixture {
    let owner = create_user(pool, "alice").await;
    let member = create_user(pool, "bob").await;
    let outsider = create_user(pool, "carol").await;

    let project = ProjectRepo::create(
        pool,
        owner.id,
        &valid_project("Collab App", "collab-app", "A place to find collaborators"),
    )
    .await
    .unwrap();
    let other_project = ProjectRepo::create(
        pool,
        member.id,
        &valid_project("Side Quest", "side-quest", "Bob's weekend side project"),
    )
    .await
    .unwrap();
    let malicious = ProjectRepo::create(
        pool,
        owner.id,
        &valid_project(MALICIOUS_NAME, "malicious", MALICIOUS_DESCRIPTION),
    )
    .await
    .unwrap();

    let vacancies = vec![
        create_vacancy(pool, project.id, "Frontend developer").await,
        create_vacancy(pool, project.id, "Designer").await,
    ];
    create_vacancy(pool, other_project.id, "Tester").await;
    VacancyRepo::create(
        pool,
        &CreateVacancy {
            project_id: malicious.id,
            title: MALICIOUS_NAME.to_string(),
            description: MALICIOUS_DESCRIPTION.to_string(),
            skills: vec![],
            user_id: None,
        },
    )
    .await
    .unwrap();

    let request_id: DbId = sqlx::query_scalar(
        "INSERT INTO requests (vacancy_id, user_id, status)
         VALUES ($1, $2, 'pending') RETURNING id",
    )
    .bind(vacancies[0].id)
    .bind(member.id)
    .fetch_one(pool)
    .await
    .unwrap();

    seed_activity(pool, project.id, request_id, owner.id, member.id).await;

    Fixture {
        owner_token: token_for(owner.id),
        member_token: token_for(member.id),
        outsider_token: token_for(outsider.id),
        owner,
        member,
        outsider,
        project,
        other_project,
        malicious,
        vacancies,
    }
}

/// Insert a post, a chat with one message, and a notification on `project_id`.
pub async fn seed_activity(
    pool: &PgPool,
    project_id: DbId,
    request_id: DbId,
    author_id: DbId,
    recipient_id: DbId,
) {
    sqlx::query(
        "INSERT INTO posts (project_id, author_id, message)
         VALUES ($1, $2, 'Kickoff on Monday')",
    )
    .bind(project_id)
    .bind(author_id)
    .execute(pool)
    .await
    .unwrap();

    let chat_id: DbId = sqlx::query_scalar(
        "INSERT INTO chats (project_id, request_id, author_id, recipient_id)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(project_id)
    .bind(request_id)
    .bind(author_id)
    .bind(recipient_id)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO messages (chat_id, author_id, body) VALUES ($1, $2, 'Welcome aboard')")
        .bind(chat_id)
        .bind(author_id)
        .execute(pool)
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO notifications (project_id, recipient_id, sender_id, chat_id, kind)
         VALUES ($1, $2, $3, $4, 'chat')",
    )
    .bind(project_id)
    .bind(recipient_id)
    .bind(author_id)
    .bind(chat_id)
    .execute(pool)
    .await
    .unwrap();
}

/// Count rows in `table` referencing `project_id`.
pub async fn count_for_project(pool: &PgPool, table: &str, project_id: DbId) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE project_id = $1"))
        .bind(project_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
