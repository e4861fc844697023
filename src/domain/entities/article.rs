use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_ARTICLE_IMAGE_HINT, DEFAULT_ARTICLE_IMAGE_URL},
    entities::{
        content::{non_blank, optional_http_url, required},
        pagination::PageRequest,
    },
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content_markdown: String,
    pub image_url: String,
    pub image_hint: String,
    pub original_article_url: Option<String>,
    pub published_date: DateTime<Utc>,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fully resolved write: slug settled, defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDraft {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content_markdown: String,
    pub image_url: String,
    pub image_hint: String,
    pub original_article_url: Option<String>,
    pub published_date: DateTime<Utc>,
    pub author: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleInput {
    #[validate(custom(function = "required"))]
    pub title: String,

    #[validate(custom(function = "required"))]
    pub excerpt: String,

    #[validate(custom(function = "required"))]
    pub content_markdown: String,

    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub image_hint: Option<String>,

    #[validate(custom(function = "optional_http_url"))]
    pub original_article_url: Option<String>,

    pub published_date: Option<DateTime<Utc>>,
    pub author: Option<String>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total_items: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

impl ArticlePage {
    pub fn new(articles: Vec<Article>, total_items: i64, request: &PageRequest) -> Self {
        ArticlePage {
            articles,
            total_items,
            current_page: request.page,
            total_pages: request.total_pages(total_items),
        }
    }
}

// ───── Conversions ──────────────────────────────────────────────────

impl ArticleInput {
    /// Draft for a brand-new article; `slug` has already been settled.
    pub fn into_new_draft(self, slug: String, default_author: &str) -> ArticleDraft {
        ArticleDraft {
            slug,
            title: self.title.trim().to_string(),
            excerpt: self.excerpt.trim().to_string(),
            content_markdown: self.content_markdown,
            image_url: non_blank(self.image_url).unwrap_or_else(|| DEFAULT_ARTICLE_IMAGE_URL.to_string()),
            image_hint: non_blank(self.image_hint).unwrap_or_else(|| DEFAULT_ARTICLE_IMAGE_HINT.to_string()),
            original_article_url: non_blank(self.original_article_url),
            published_date: self.published_date.unwrap_or_else(Utc::now),
            author: non_blank(self.author).unwrap_or_else(|| default_author.to_string()),
        }
    }

    /// Draft replacing `current`. Absent image, author and date keep their
    /// stored values; an absent source URL clears it.
    pub fn into_update_draft(self, slug: String, current: &Article) -> ArticleDraft {
        ArticleDraft {
            slug,
            title: self.title.trim().to_string(),
            excerpt: self.excerpt.trim().to_string(),
            content_markdown: self.content_markdown,
            image_url: non_blank(self.image_url).unwrap_or_else(|| current.image_url.clone()),
            image_hint: non_blank(self.image_hint).unwrap_or_else(|| current.image_hint.clone()),
            original_article_url: non_blank(self.original_article_url),
            published_date: self.published_date.unwrap_or(current.published_date),
            author: non_blank(self.author).unwrap_or_else(|| current.author.clone()),
        }
    }
}

impl Article {
    pub fn new_record(draft: &ArticleDraft) -> Self {
        let now = Utc::now();
        Article {
            id: Uuid::new_v4(),
            slug: draft.slug.clone(),
            title: draft.title.clone(),
            excerpt: draft.excerpt.clone(),
            content_markdown: draft.content_markdown.clone(),
            image_url: draft.image_url.clone(),
            image_hint: draft.image_hint.clone(),
            original_article_url: draft.original_article_url.clone(),
            published_date: draft.published_date,
            author: draft.author.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn revise(&self, draft: &ArticleDraft) -> Self {
        Article {
            id: self.id,
            created_at: self.created_at,
            updated_at: Utc::now(),
            ..Article::new_record(draft)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ArticleInput {
        ArticleInput {
            title: "Hello World!!".into(),
            excerpt: "A short excerpt".into(),
            content_markdown: "# Hello".into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_draft_applies_defaults() {
        let draft = input().into_new_draft("hello-world".into(), "Site Owner");

        assert_eq!(draft.image_url, DEFAULT_ARTICLE_IMAGE_URL);
        assert_eq!(draft.author, "Site Owner");
        assert_eq!(draft.original_article_url, None);
    }

    #[test]
    fn update_draft_keeps_stored_author_and_clears_source() {
        let mut stored = Article::new_record(&input().into_new_draft("hello-world".into(), "Ada"));
        stored.original_article_url = Some("https://example.com".into());

        let draft = input().into_update_draft(stored.slug.clone(), &stored);

        assert_eq!(draft.author, "Ada");
        assert_eq!(draft.published_date, stored.published_date);
        assert_eq!(draft.original_article_url, None);
    }

    #[test]
    fn missing_body_fails_validation() {
        let article = ArticleInput {
            content_markdown: "  ".into(),
            ..input()
        };

        assert!(article.validate().is_err());
    }
}
