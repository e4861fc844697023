use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_AVATAR_HINT, DEFAULT_AVATAR_URL},
    entities::content::{non_blank, optional_http_url, required, CollectionEntity},
    errors::AppError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub avatar_url: String,
    pub avatar_hint: String,
    pub message: String,
    pub linked_in_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationInput {
    #[validate(custom(function = "required"))]
    pub name: String,

    #[validate(custom(function = "required"))]
    pub title: String,

    #[validate(custom(function = "required"))]
    pub message: String,

    pub avatar_url: Option<String>,
    pub avatar_hint: Option<String>,

    #[validate(custom(function = "optional_http_url"))]
    pub linked_in_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationDraft {
    pub name: String,
    pub title: String,
    pub avatar_url: String,
    pub avatar_hint: String,
    pub message: String,
    pub linked_in_url: String,
}

impl CollectionEntity for Recommendation {
    type Input = RecommendationInput;
    type Draft = RecommendationDraft;

    const LABEL: &'static str = "Recommendation";

    fn draft(input: RecommendationInput) -> Result<RecommendationDraft, AppError> {
        Ok(RecommendationDraft {
            name: input.name.trim().to_string(),
            title: input.title.trim().to_string(),
            message: input.message.trim().to_string(),
            avatar_url: non_blank(input.avatar_url).unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
            avatar_hint: non_blank(input.avatar_hint).unwrap_or_else(|| DEFAULT_AVATAR_HINT.to_string()),
            linked_in_url: non_blank(input.linked_in_url).unwrap_or_default(),
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn new_record(draft: &RecommendationDraft) -> Self {
        let now = Utc::now();
        Recommendation {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            title: draft.title.clone(),
            avatar_url: draft.avatar_url.clone(),
            avatar_hint: draft.avatar_hint.clone(),
            message: draft.message.clone(),
            linked_in_url: draft.linked_in_url.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn revise(&self, draft: &RecommendationDraft) -> Self {
        Recommendation {
            id: self.id,
            created_at: self.created_at,
            updated_at: Utc::now(),
            ..Recommendation::new_record(draft)
        }
    }
}
