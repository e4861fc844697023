use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    entities::{
        article::{Article, ArticleInput, ArticlePage},
        content::non_blank,
        pagination::{PageRequest, PaginationParams},
    },
    errors::AppError,
    repositories::content::ArticleRepository,
    utils::slug::{derive_slug, with_suffix},
};

pub struct ArticleHandler {
    pub repo: Arc<dyn ArticleRepository>,
    pub default_author: String,
}

impl ArticleHandler {
    pub fn new(repo: Arc<dyn ArticleRepository>, default_author: impl Into<String>) -> Self {
        ArticleHandler {
            repo,
            default_author: default_author.into(),
        }
    }

    /// One page of articles, newest publication first.
    pub async fn list(&self, params: &PaginationParams) -> Result<ArticlePage, AppError> {
        let request = PageRequest::from_params(params);
        let (articles, total) = self.repo.list_page(&request).await?;

        Ok(ArticlePage::new(articles, total, &request))
    }

    pub async fn get(&self, slug: &str) -> Result<Article, AppError> {
        self.repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Article not found".into()))
    }

    /// Creates an article. A missing slug is derived from the title; a slug
    /// that is already taken gets a time-based suffix instead of a conflict.
    pub async fn create(&self, input: ArticleInput) -> Result<Article, AppError> {
        input.validate()?;

        let base = non_blank(input.slug.clone()).unwrap_or_else(|| derive_slug(&input.title));
        let slug = if self.repo.slug_exists(&base).await? {
            let suffixed = with_suffix(&base, Utc::now());
            tracing::debug!(%base, %suffixed, "Slug taken, appending suffix");
            suffixed
        } else {
            base
        };

        let draft = input.into_new_draft(slug, &self.default_author);
        let article = self.repo.insert(&draft).await?;

        tracing::info!(slug = %article.slug, "Article created");
        Ok(article)
    }

    /// Replaces the article stored under `current_slug`. Moving to a slug
    /// owned by another article is a conflict and leaves both untouched.
    pub async fn update(&self, current_slug: &str, input: ArticleInput) -> Result<Article, AppError> {
        input.validate()?;

        let current = self.get(current_slug).await?;

        let slug = match non_blank(input.slug.clone()) {
            Some(requested) if requested != current.slug => {
                if self.repo.slug_exists(&requested).await? {
                    return Err(AppError::Conflict(
                        "New slug already exists. Please choose a unique slug.".into(),
                    ));
                }
                requested
            }
            _ => current.slug.clone(),
        };

        let draft = input.into_update_draft(slug, &current);
        self.repo.update(&current.id, &draft).await.map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound("Article not found".into()),
            _ => e,
        })
    }

    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        self.repo.delete_by_slug(slug).await.map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound("Article not found".into()),
            _ => e,
        })?;

        tracing::info!(%slug, "Article deleted");
        Ok(())
    }
}
