//! Test utilities for integration testing.

use axum_test::TestServer;
use sqlx::SqlitePool;

use crate::{
    auth::password,
    config::Config,
    db::{
        handlers::{Departements, Formations, Inscriptions, Repository, Students},
        models::{
            departements::{DepartementCreateDBRequest, DepartementDBResponse},
            formations::{FormationCreateDBRequest, FormationDBResponse},
            inscriptions::{InscriptionCreateDBRequest, InscriptionDBResponse},
            students::{StudentCreateDBRequest, StudentDBResponse},
        },
    },
    types::{DepartementId, FormationId, StudentId},
    AppState,
};

/// Known-good password used by every seeded student.
pub const TEST_PASSWORD: &str = "password123";

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        ..Default::default()
    }
}

pub async fn create_test_app(pool: SqlitePool) -> TestServer {
    create_test_app_with_config(pool, create_test_config()).await
}

pub async fn create_test_app_with_config(pool: SqlitePool, config: Config) -> TestServer {
    let state = AppState::builder()
        .db(pool)
        .config(config)
        .http(reqwest::Client::new())
        .build();

    let router = crate::build_router(&state).expect("Failed to build router");
    TestServer::new(router).expect("Failed to create test server")
}

pub async fn create_test_departement(pool: &SqlitePool, name: &str) -> DepartementDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = Departements::new(&mut conn);
    repo.create(&DepartementCreateDBRequest {
        name: name.to_string(),
    })
    .await
    .expect("Failed to create departement")
}

pub async fn create_test_student(
    pool: &SqlitePool,
    email: &str,
    departement_id: DepartementId,
) -> StudentDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = Students::new(&mut conn);
    repo.create(&StudentCreateDBRequest {
        nom: "Test".to_string(),
        prenom: "User".to_string(),
        email: email.to_string(),
        password_hash: password::hash_string(TEST_PASSWORD).expect("Failed to hash password"),
        departement_id,
    })
    .await
    .expect("Failed to create student")
}

pub async fn create_test_formation(
    pool: &SqlitePool,
    title: &str,
    departement_id: DepartementId,
) -> FormationDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = Formations::new(&mut conn);
    repo.create(&FormationCreateDBRequest {
        title: title.to_string(),
        description: format!("{title} (test formation)"),
        departement_id,
    })
    .await
    .expect("Failed to create formation")
}

pub async fn enroll_test_student(
    pool: &SqlitePool,
    student_id: StudentId,
    formation_id: FormationId,
) -> InscriptionDBResponse {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let mut repo = Inscriptions::new(&mut conn);
    repo.create(&InscriptionCreateDBRequest {
        student_id,
        formation_id,
    })
    .await
    .expect("Failed to create inscription")
}
