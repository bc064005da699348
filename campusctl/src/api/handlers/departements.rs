use axum::{extract::State, http::StatusCode, Json};

use crate::{
    api::models::departements::{DepartementCreate, DepartementResponse},
    db::{
        handlers::{Departements, Repository},
        models::departements::DepartementCreateDBRequest,
    },
    errors::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/departements",
    tag = "departements",
    summary = "Create department",
    request_body = DepartementCreate,
    responses(
        (status = 201, description = "Department created", body = DepartementResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_departement(
    State(state): State<AppState>,
    Json(create): Json<DepartementCreate>,
) -> Result<(StatusCode, Json<DepartementResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Departements::new(&mut conn);

    // Unconditional insert; department names are not unique.
    let departement = repo
        .create(&DepartementCreateDBRequest { name: create.name })
        .await?;

    Ok((StatusCode::CREATED, Json(DepartementResponse::from(departement))))
}

#[utoipa::path(
    get,
    path = "/departements",
    tag = "departements",
    summary = "List departments",
    responses(
        (status = 200, description = "All departments", body = Vec<DepartementResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_departements(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartementResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Departements::new(&mut conn);

    let departements = repo.list(&()).await?;

    Ok(Json(
        departements.into_iter().map(DepartementResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app;
    use serde_json::json;
    use sqlx::SqlitePool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_and_list_departements(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.post("/departements").json(&json!({"name": "CS"})).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        let created: DepartementResponse = response.json();
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "CS");

        let response = app.get("/departements").await;
        response.assert_status_ok();
        let all: Vec<DepartementResponse> = response.json();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "CS");
    }

    // Department names are not unique; the insert is unconditional.
    #[sqlx::test]
    #[test_log::test]
    async fn test_duplicate_department_names_are_allowed(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        for _ in 0..2 {
            let response = app.post("/departements").json(&json!({"name": "Maths"})).await;
            response.assert_status(axum::http::StatusCode::CREATED);
        }

        let all: Vec<DepartementResponse> = app.get("/departements").await.json();
        assert_eq!(all.len(), 2);
    }
}
