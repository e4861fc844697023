use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{entities::content::{required, CollectionEntity}, errors::AppError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub image_hint: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceInput {
    #[validate(custom(function = "required"))]
    pub title: String,

    #[validate(custom(function = "required"))]
    pub description: String,

    #[validate(custom(function = "required"))]
    pub image_url: String,

    #[validate(custom(function = "required"))]
    pub image_hint: String,
}

impl CollectionEntity for Service {
    type Input = ServiceInput;
    type Draft = ServiceInput;

    const LABEL: &'static str = "Service";

    fn draft(input: ServiceInput) -> Result<ServiceInput, AppError> {
        Ok(ServiceInput {
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            image_url: input.image_url.trim().to_string(),
            image_hint: input.image_hint.trim().to_string(),
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn new_record(draft: &ServiceInput) -> Self {
        let now = Utc::now();
        Service {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
            image_hint: draft.image_hint.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn revise(&self, draft: &ServiceInput) -> Self {
        Service {
            id: self.id,
            created_at: self.created_at,
            updated_at: Utc::now(),
            ..Service::new_record(draft)
        }
    }
}
