use crate::{
    entities::{
        recommendation::{Recommendation, RecommendationDraft},
        service::{Service, ServiceInput},
        technology::{Technology, TechnologyDraft},
    },
    repositories::sqlx_repo::{Bind, PgRecord},
};

impl PgRecord for Service {
    const TABLE: &'static str = "services";
    const ORDER_BY: &'static str = "created_at DESC";

    fn columns(draft: &ServiceInput) -> Vec<(&'static str, Bind)> {
        vec![
            ("title", Bind::Text(draft.title.clone())),
            ("description", Bind::Text(draft.description.clone())),
            ("image_url", Bind::Text(draft.image_url.clone())),
            ("image_hint", Bind::Text(draft.image_hint.clone())),
        ]
    }
}

impl PgRecord for Technology {
    const TABLE: &'static str = "technologies";
    const ORDER_BY: &'static str = "name ASC";
    const UNIQUE: Option<(&'static str, &'static str)> =
        Some(("technologies_name_key", "A technology with this name already exists"));

    fn columns(draft: &TechnologyDraft) -> Vec<(&'static str, Bind)> {
        vec![
            ("name", Bind::Text(draft.name.clone())),
            ("icon_name", Bind::NullableText(draft.icon_name.clone())),
            ("icon_svg", Bind::NullableText(draft.icon_svg.clone())),
            ("color", Bind::Text(draft.color.clone())),
        ]
    }
}

impl PgRecord for Recommendation {
    const TABLE: &'static str = "recommendations";
    const ORDER_BY: &'static str = "created_at DESC";

    fn columns(draft: &RecommendationDraft) -> Vec<(&'static str, Bind)> {
        vec![
            ("name", Bind::Text(draft.name.clone())),
            ("title", Bind::Text(draft.title.clone())),
            ("avatar_url", Bind::Text(draft.avatar_url.clone())),
            ("avatar_hint", Bind::Text(draft.avatar_hint.clone())),
            ("message", Bind::Text(draft.message.clone())),
            ("linked_in_url", Bind::Text(draft.linked_in_url.clone())),
        ]
    }
}
