use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::DEFAULT_TECHNOLOGY_COLOR,
    entities::content::{non_blank, required, CollectionEntity},
    errors::AppError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub icon_name: Option<String>,
    pub icon_svg: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct TechnologyInput {
    #[validate(custom(function = "required"))]
    pub name: String,

    pub icon_name: Option<String>,
    pub icon_svg: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TechnologyDraft {
    pub name: String,
    pub icon_name: Option<String>,
    pub icon_svg: Option<String>,
    pub color: String,
}

impl CollectionEntity for Technology {
    type Input = TechnologyInput;
    type Draft = TechnologyDraft;

    const LABEL: &'static str = "Technology";

    fn draft(input: TechnologyInput) -> Result<TechnologyDraft, AppError> {
        let icon_name = non_blank(input.icon_name);
        let icon_svg = non_blank(input.icon_svg);

        if icon_name.is_none() && icon_svg.is_none() {
            return Err(AppError::invalid_field("iconName", "Either iconName or iconSvg must be provided"));
        }

        Ok(TechnologyDraft {
            name: input.name.trim().to_string(),
            icon_name,
            icon_svg,
            color: non_blank(input.color).unwrap_or_else(|| DEFAULT_TECHNOLOGY_COLOR.to_string()),
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn new_record(draft: &TechnologyDraft) -> Self {
        let now = Utc::now();
        Technology {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            icon_name: draft.icon_name.clone(),
            icon_svg: draft.icon_svg.clone(),
            color: draft.color.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn revise(&self, draft: &TechnologyDraft) -> Self {
        Technology {
            id: self.id,
            created_at: self.created_at,
            updated_at: Utc::now(),
            ..Technology::new_record(draft)
        }
    }
}
