use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::content::{non_blank, required, SingletonEntity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub main_heading: String,
    pub sub_heading_primary: String,
    pub sub_heading_secondary: String,
    pub background_image_url: String,
    pub background_image_hint: String,
    pub cta_button1_text: String,
    pub cta_button1_link: String,
    pub cta_button2_text: String,
    pub cta_button2_link: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        HeroContent {
            main_heading: "Your Name".to_string(),
            sub_heading_primary: "Software Developer".to_string(),
            sub_heading_secondary: "Focused on performance, good practices and delivering real value.".to_string(),
            background_image_url: "https://placehold.co/1920x1080.png".to_string(),
            background_image_hint: "developer workspace code".to_string(),
            cta_button1_text: "View Projects".to_string(),
            cta_button1_link: "#projects".to_string(),
            cta_button2_text: "Get in Touch".to_string(),
            cta_button2_link: "#contact".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContentInput {
    #[validate(custom(function = "required"))]
    pub main_heading: String,

    #[validate(custom(function = "required"))]
    pub sub_heading_primary: String,

    pub sub_heading_secondary: Option<String>,
    pub background_image_url: Option<String>,
    pub background_image_hint: Option<String>,
    pub cta_button1_text: Option<String>,
    pub cta_button1_link: Option<String>,
    pub cta_button2_text: Option<String>,
    pub cta_button2_link: Option<String>,
}

impl SingletonEntity for HeroContent {
    type Input = HeroContentInput;

    const LABEL: &'static str = "Hero content";

    fn apply(self, input: HeroContentInput) -> Self {
        HeroContent {
            main_heading: input.main_heading.trim().to_string(),
            sub_heading_primary: input.sub_heading_primary.trim().to_string(),
            sub_heading_secondary: non_blank(input.sub_heading_secondary).unwrap_or(self.sub_heading_secondary),
            background_image_url: non_blank(input.background_image_url).unwrap_or(self.background_image_url),
            background_image_hint: non_blank(input.background_image_hint).unwrap_or(self.background_image_hint),
            cta_button1_text: non_blank(input.cta_button1_text).unwrap_or(self.cta_button1_text),
            cta_button1_link: non_blank(input.cta_button1_link).unwrap_or(self.cta_button1_link),
            cta_button2_text: non_blank(input.cta_button2_text).unwrap_or(self.cta_button2_text),
            cta_button2_link: non_blank(input.cta_button2_link).unwrap_or(self.cta_button2_link),
        }
    }
}
