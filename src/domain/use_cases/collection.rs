use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::content::CollectionEntity,
    errors::AppError,
    repositories::content::CollectionRepository,
    utils::valid_uuid::valid_uuid,
};

/// CRUD over one list-shaped content kind.
pub struct CollectionHandler<E: CollectionEntity> {
    pub repo: Arc<dyn CollectionRepository<E>>,
}

impl<E: CollectionEntity> CollectionHandler<E> {
    pub fn new(repo: Arc<dyn CollectionRepository<E>>) -> Self {
        CollectionHandler { repo }
    }

    pub async fn list(&self) -> Result<Vec<E>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: &str) -> Result<E, AppError> {
        let id = valid_uuid(id, E::LABEL)?;

        self.repo
            .find(&id)
            .await?
            .ok_or_else(|| not_found::<E>())
    }

    pub async fn create(&self, input: E::Input) -> Result<E, AppError> {
        input.validate()?;
        let draft = E::draft(input)?;

        let created = self.repo.insert(&draft).await?;
        tracing::info!(id = %created.id(), "{} created", E::LABEL);
        Ok(created)
    }

    pub async fn update(&self, id: &str, input: E::Input) -> Result<E, AppError> {
        input.validate()?;
        let id = valid_uuid(id, E::LABEL)?;
        let draft = E::draft(input)?;

        self.repo.update(&id, &draft).await.map_err(|e| match e {
            AppError::NotFound(_) => not_found::<E>(),
            _ => e,
        })
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = valid_uuid(id, E::LABEL)?;

        self.repo.delete(&id).await.map_err(|e| match e {
            AppError::NotFound(_) => not_found::<E>(),
            _ => e,
        })?;

        tracing::info!(%id, "{} deleted", E::LABEL);
        Ok(())
    }
}

fn not_found<E: CollectionEntity>() -> AppError {
    AppError::NotFound(format!("{} not found", E::LABEL))
}
