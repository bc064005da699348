//! Database repository for enrollment links.

use crate::{
    db::{
        errors::Result,
        handlers::repository::Repository,
        models::{
            formations::FormationDBResponse,
            inscriptions::{InscriptionCreateDBRequest, InscriptionDBResponse},
        },
    },
    types::{FormationId, InscriptionId, StudentId},
};
use sqlx::SqliteConnection;
use tracing::instrument;

pub struct Inscriptions<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Inscriptions<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Whether the (student, formation) pair is already enrolled.
    ///
    /// This pre-insert check is the only guard on pair uniqueness; the table
    /// carries no unique constraint, so two concurrent enrollments can both
    /// pass it.
    #[instrument(skip(self), err)]
    pub async fn exists(
        &mut self,
        student_id: StudentId,
        formation_id: FormationId,
    ) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM inscriptions WHERE student_id = $1 AND formation_id = $2)",
        )
        .bind(student_id)
        .bind(formation_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(exists)
    }

    /// The formations a student is enrolled in, joined through the link table.
    #[instrument(skip(self), err)]
    pub async fn list_formations_for_student(
        &mut self,
        student_id: StudentId,
    ) -> Result<Vec<FormationDBResponse>> {
        let formations = sqlx::query_as::<_, FormationDBResponse>(
            "SELECT f.id, f.title, f.description, f.departement_id, f.created_at
             FROM formations f
             JOIN inscriptions i ON i.formation_id = f.id
             WHERE i.student_id = $1",
        )
        .bind(student_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(formations)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Inscriptions<'c> {
    type CreateRequest = InscriptionCreateDBRequest;
    type Response = InscriptionDBResponse;
    type Id = InscriptionId;
    type Filter = ();

    #[instrument(skip(self, request), fields(student_id = request.student_id, formation_id = request.formation_id), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let inscription = sqlx::query_as::<_, InscriptionDBResponse>(
            "INSERT INTO inscriptions (student_id, formation_id)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(request.student_id)
        .bind(request.formation_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(inscription)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let inscription =
            sqlx::query_as::<_, InscriptionDBResponse>("SELECT * FROM inscriptions WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.db)
                .await?;

        Ok(inscription)
    }

    #[instrument(skip_all, err)]
    async fn list(&mut self, _filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let inscriptions =
            sqlx::query_as::<_, InscriptionDBResponse>("SELECT * FROM inscriptions")
                .fetch_all(&mut *self.db)
                .await?;

        Ok(inscriptions)
    }
}
