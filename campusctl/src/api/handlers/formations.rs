use axum::{extract::State, http::StatusCode, Json};

use crate::{
    api::models::formations::{FormationCreate, FormationResponse},
    db::{
        handlers::{Formations, Repository},
        models::formations::FormationCreateDBRequest,
    },
    errors::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/formations",
    tag = "formations",
    summary = "Create formation",
    request_body = FormationCreate,
    responses(
        (status = 201, description = "Formation created", body = FormationResponse),
        (status = 400, description = "Unknown department"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_formation(
    State(state): State<AppState>,
    Json(create): Json<FormationCreate>,
) -> Result<(StatusCode, Json<FormationResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Formations::new(&mut conn);

    // departement_id is not pre-checked here the way student creation does
    // it; the schema-level foreign key rejects unknown departments instead.
    let formation = repo
        .create(&FormationCreateDBRequest {
            title: create.title,
            description: create.description,
            departement_id: create.departement_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(FormationResponse::from(formation))))
}

#[utoipa::path(
    get,
    path = "/formations",
    tag = "formations",
    summary = "List formations",
    responses(
        (status = 200, description = "All formations", body = Vec<FormationResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_formations(State(state): State<AppState>) -> Result<Json<Vec<FormationResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Formations::new(&mut conn);

    let formations = repo.list(&()).await?;

    Ok(Json(
        formations.into_iter().map(FormationResponse::from).collect(),
    ))
}
