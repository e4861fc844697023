use std::sync::Arc;

use validator::Validate;

use crate::{entities::content::SingletonEntity, errors::AppError, repositories::content::SingletonRepository};

/// Read and upsert for a single-row content kind.
pub struct SingletonHandler<E: SingletonEntity> {
    pub repo: Arc<dyn SingletonRepository<E>>,
}

impl<E: SingletonEntity> SingletonHandler<E> {
    pub fn new(repo: Arc<dyn SingletonRepository<E>>) -> Self {
        SingletonHandler { repo }
    }

    /// Stored content, or the defaults when nothing has been saved yet.
    pub async fn get(&self) -> Result<E, AppError> {
        Ok(self.repo.load().await?.unwrap_or_default())
    }

    pub async fn upsert(&self, input: E::Input) -> Result<E, AppError> {
        input.validate()?;

        let current = self.get().await?;
        let saved = self.repo.save(&current.apply(input)).await?;

        tracing::info!("{} saved", E::LABEL);
        Ok(saved)
    }
}
