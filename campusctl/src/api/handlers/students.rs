use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::models::{formations::FormationResponse, students::{StudentCreate, StudentResponse}},
    auth::password,
    db::{
        handlers::{Departements, Inscriptions, Repository, Students},
        models::students::StudentCreateDBRequest,
    },
    errors::{Error, Result},
    types::StudentId,
    AppState,
};

#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    summary = "Create student",
    request_body = StudentCreate,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Unknown department"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(create): Json<StudentCreate>,
) -> Result<(StatusCode, Json<StudentResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    // Duplicate-email check. Racy by design: two concurrent creates can both
    // pass it, and only the schema-level unique index stops the second.
    {
        let mut repo = Students::new(&mut conn);
        if repo.get_by_email(&create.email).await?.is_some() {
            return Err(Error::Conflict {
                message: "An account with this email address already exists".to_string(),
            });
        }
    }

    // Students must reference an existing department at creation time.
    {
        let mut repo = Departements::new(&mut conn);
        if repo.get_by_id(create.departement_id).await?.is_none() {
            return Err(Error::BadRequest {
                message: format!("Departement {} does not exist", create.departement_id),
            });
        }
    }

    // Hash the password on a blocking thread to avoid blocking the async runtime
    let password = create.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || password::hash_string(&password))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password hashing task: {e}"),
        })??;

    let mut repo = Students::new(&mut conn);
    let student = repo
        .create(&StudentCreateDBRequest {
            nom: create.nom,
            prenom: create.prenom,
            email: create.email,
            password_hash,
            departement_id: create.departement_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))))
}

#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    summary = "List students",
    responses(
        (status = 200, description = "All students", body = Vec<StudentResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<StudentResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut conn);

    let students = repo.list(&()).await?;

    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    summary = "Get student",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student", body = StudentResponse),
        (status = 404, description = "Unknown student"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(student_id = id))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> Result<Json<StudentResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut conn);

    let student = repo.get_by_id(id).await?.ok_or_else(|| Error::NotFound {
        resource: "Student".to_string(),
        id: id.to_string(),
    })?;

    Ok(Json(StudentResponse::from(student)))
}

#[utoipa::path(
    get,
    path = "/students/{id}/formations",
    tag = "students",
    summary = "List a student's formations",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Formations the student is enrolled in", body = Vec<FormationResponse>),
        (status = 404, description = "Unknown student"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all, fields(student_id = id))]
pub async fn list_student_formations(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> Result<Json<Vec<FormationResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    {
        let mut repo = Students::new(&mut conn);
        if repo.get_by_id(id).await?.is_none() {
            return Err(Error::NotFound {
                resource: "Student".to_string(),
                id: id.to_string(),
            });
        }
    }

    let mut repo = Inscriptions::new(&mut conn);
    let formations = repo.list_formations_for_student(id).await?;

    Ok(Json(
        formations.into_iter().map(FormationResponse::from).collect(),
    ))
}
