use crate::{
    entities::{about::AboutContent, hero::HeroContent},
    repositories::sqlx_repo::PgSingleton,
};

impl PgSingleton for HeroContent {
    const TABLE: &'static str = "hero_content";

    fn columns(&self) -> Vec<(&'static str, String)> {
        vec![
            ("main_heading", self.main_heading.clone()),
            ("sub_heading_primary", self.sub_heading_primary.clone()),
            ("sub_heading_secondary", self.sub_heading_secondary.clone()),
            ("background_image_url", self.background_image_url.clone()),
            ("background_image_hint", self.background_image_hint.clone()),
            ("cta_button1_text", self.cta_button1_text.clone()),
            ("cta_button1_link", self.cta_button1_link.clone()),
            ("cta_button2_text", self.cta_button2_text.clone()),
            ("cta_button2_link", self.cta_button2_link.clone()),
        ]
    }
}

impl PgSingleton for AboutContent {
    const TABLE: &'static str = "about_content";

    fn columns(&self) -> Vec<(&'static str, String)> {
        vec![
            ("image_url", self.image_url.clone()),
            ("image_hint", self.image_hint.clone()),
            ("image_alt", self.image_alt.clone()),
            ("title", self.title.clone()),
            ("paragraph1", self.paragraph1.clone()),
            ("paragraph2", self.paragraph2.clone()),
            ("resume_modal_button_text", self.resume_modal_button_text.clone()),
            ("download_resume_button_text", self.download_resume_button_text.clone()),
            ("download_resume_link", self.download_resume_link.clone()),
        ]
    }
}
