use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::content::{non_blank, required, SingletonEntity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub image_url: String,
    pub image_hint: String,
    pub image_alt: String,
    pub title: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub resume_modal_button_text: String,
    pub download_resume_button_text: String,
    pub download_resume_link: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        AboutContent {
            image_url: "https://placehold.co/600x800.png".to_string(),
            image_hint: "developer portrait professional".to_string(),
            image_alt: "Portrait of the site owner".to_string(),
            title: "About Me".to_string(),
            paragraph1: "I build modern, well-structured and fast applications.".to_string(),
            paragraph2: "I enjoy learning continuously, working in teams and contributing to projects with real impact.".to_string(),
            resume_modal_button_text: "View Resume".to_string(),
            download_resume_button_text: "Download Resume".to_string(),
            download_resume_link: "/resume.pdf".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContentInput {
    #[validate(custom(function = "required"))]
    pub title: String,

    #[validate(custom(function = "required"))]
    pub paragraph1: String,

    pub image_url: Option<String>,
    pub image_hint: Option<String>,
    pub image_alt: Option<String>,
    pub paragraph2: Option<String>,
    pub resume_modal_button_text: Option<String>,
    pub download_resume_button_text: Option<String>,
    pub download_resume_link: Option<String>,
}

impl SingletonEntity for AboutContent {
    type Input = AboutContentInput;

    const LABEL: &'static str = "About content";

    fn apply(self, input: AboutContentInput) -> Self {
        AboutContent {
            title: input.title.trim().to_string(),
            paragraph1: input.paragraph1.trim().to_string(),
            image_url: non_blank(input.image_url).unwrap_or(self.image_url),
            image_hint: non_blank(input.image_hint).unwrap_or(self.image_hint),
            image_alt: non_blank(input.image_alt).unwrap_or(self.image_alt),
            paragraph2: non_blank(input.paragraph2).unwrap_or(self.paragraph2),
            resume_modal_button_text: non_blank(input.resume_modal_button_text)
                .unwrap_or(self.resume_modal_button_text),
            download_resume_button_text: non_blank(input.download_resume_button_text)
                .unwrap_or(self.download_resume_button_text),
            download_resume_link: non_blank(input.download_resume_link).unwrap_or(self.download_resume_link),
        }
    }
}
