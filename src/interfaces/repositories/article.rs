use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        article::{Article, ArticleDraft},
        pagination::PageRequest,
    },
    errors::{conflict_on, AppError},
    repositories::{content::ArticleRepository, sqlx_repo::SqlxContentRepo},
};

const SLUG_CONSTRAINT: &str = "articles_slug_key";
const SLUG_TAKEN: &str = "An article with this slug already exists";

#[async_trait]
impl ArticleRepository for SqlxContentRepo {
    async fn list_page(&self, page: &PageRequest) -> Result<(Vec<Article>, i64), AppError> {
        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT * FROM articles
            ORDER BY published_date DESC, created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await?;

        Ok((articles, total))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, AppError> {
        let article = sqlx::query_as::<_, Article>("SELECT * FROM articles WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(article)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM articles WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn insert(&self, draft: &ArticleDraft) -> Result<Article, AppError> {
        sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles (
                id, slug, title, excerpt, content_markdown, image_url, image_hint,
                original_article_url, published_date, author
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&draft.slug)
        .bind(&draft.title)
        .bind(&draft.excerpt)
        .bind(&draft.content_markdown)
        .bind(&draft.image_url)
        .bind(&draft.image_hint)
        .bind(&draft.original_article_url)
        .bind(draft.published_date)
        .bind(&draft.author)
        .fetch_one(&self.pool)
        .await
        .map_err(conflict_on(SLUG_CONSTRAINT, SLUG_TAKEN))
    }

    async fn update(&self, id: &Uuid, draft: &ArticleDraft) -> Result<Article, AppError> {
        sqlx::query_as::<_, Article>(
            r#"
            UPDATE articles SET
                slug = $1,
                title = $2,
                excerpt = $3,
                content_markdown = $4,
                image_url = $5,
                image_hint = $6,
                original_article_url = $7,
                published_date = $8,
                author = $9,
                updated_at = NOW()
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(&draft.slug)
        .bind(&draft.title)
        .bind(&draft.excerpt)
        .bind(&draft.content_markdown)
        .bind(&draft.image_url)
        .bind(&draft.image_hint)
        .bind(&draft.original_article_url)
        .bind(draft.published_date)
        .bind(&draft.author)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(conflict_on(SLUG_CONSTRAINT, SLUG_TAKEN))?
        .ok_or_else(|| AppError::NotFound("Article not found".into()))
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM articles WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Article not found".into()));
        }

        Ok(())
    }
}
