use axum::{extract::State, Json};

use crate::{
    api::models::{auth::LoginRequest, students::StudentResponse},
    auth::password,
    db::handlers::Students,
    errors::{Error, Result},
    AppState,
};

/// The one message for every login failure, so callers cannot tell an
/// unknown email from a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[utoipa::path(
    post,
    path = "/login",
    tag = "authentication",
    summary = "Check credentials",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials valid", body = StudentResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<StudentResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Students::new(&mut conn);

    // Find student by email
    let student = repo
        .get_by_email(&request.email)
        .await?
        .ok_or_else(|| Error::Unauthenticated {
            message: Some(INVALID_CREDENTIALS.to_string()),
        })?;

    // Verify password on a blocking thread to avoid blocking the async runtime
    let submitted = request.password.clone();
    let hash = student.password_hash.clone();
    let is_valid = tokio::task::spawn_blocking(move || password::verify_string(&submitted, &hash))
        .await
        .map_err(|e| Error::Internal {
            operation: format!("spawn password verification task: {e}"),
        })??;

    if !is_valid {
        return Err(Error::Unauthenticated {
            message: Some(INVALID_CREDENTIALS.to_string()),
        });
    }

    // No session or token is issued; the caller only learns who they are.
    Ok(Json(StudentResponse::from(student)))
}
