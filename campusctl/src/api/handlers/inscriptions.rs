use axum::{extract::State, http::StatusCode, Json};

use crate::{
    api::models::inscriptions::{InscriptionCreate, InscriptionResponse},
    db::{
        handlers::{Inscriptions, Repository},
        models::inscriptions::InscriptionCreateDBRequest,
    },
    errors::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/inscriptions",
    tag = "inscriptions",
    summary = "Enroll a student in a formation",
    request_body = InscriptionCreate,
    responses(
        (status = 201, description = "Enrollment created", body = InscriptionResponse),
        (status = 400, description = "Unknown student or formation"),
        (status = 409, description = "Student already enrolled in this formation"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(student_id = create.student_id, formation_id = create.formation_id))]
pub async fn enroll(
    State(state): State<AppState>,
    Json(create): Json<InscriptionCreate>,
) -> Result<(StatusCode, Json<InscriptionResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Inscriptions::new(&mut conn);

    if repo.exists(create.student_id, create.formation_id).await? {
        return Err(Error::Conflict {
            message: "Student already enrolled in this formation".to_string(),
        });
    }

    // Neither id is pre-checked; the schema-level foreign keys reject
    // unknown students or formations.
    let inscription = repo
        .create(&InscriptionCreateDBRequest {
            student_id: create.student_id,
            formation_id: create.formation_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(InscriptionResponse::from(inscription))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        create_test_app, create_test_departement, create_test_formation, create_test_student,
    };
    use serde_json::json;
    use sqlx::SqlitePool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_enrolling_twice_conflicts(pool: SqlitePool) {
        let departement = create_test_departement(&pool, "CS").await;
        let student = create_test_student(&pool, "marie@example.com", departement.id).await;
        let formation = create_test_formation(&pool, "Compilers", departement.id).await;

        let app = create_test_app(pool).await;
        let payload = json!({"student_id": student.id, "formation_id": formation.id});

        let first = app.post("/inscriptions").json(&payload).await;
        first.assert_status(axum::http::StatusCode::CREATED);
        let created: InscriptionResponse = first.json();
        assert_eq!(created.student_id, student.id);
        assert_eq!(created.formation_id, formation.id);

        let second = app.post("/inscriptions").json(&payload).await;
        second.assert_status(axum::http::StatusCode::CONFLICT);
    }

    // Referential integrity is enforced uniformly now. Historically
    // enrollment accepted dangling ids; today the schema-level foreign keys
    // reject them with 400, matching student creation's department check.
    #[sqlx::test]
    #[test_log::test]
    async fn test_enrollment_rejects_unknown_references(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app
            .post("/inscriptions")
            .json(&json!({"student_id": 404, "formation_id": 404}))
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }
}
