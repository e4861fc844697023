use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        about::AboutContent,
        article::{Article, ArticleDraft},
        content::{CollectionEntity, SingletonEntity},
        hero::HeroContent,
        pagination::PageRequest,
        recommendation::Recommendation,
        service::Service,
        technology::Technology,
    },
    errors::AppError,
};

#[async_trait]
pub trait CollectionRepository<E: CollectionEntity>: Send + Sync {
    /// Every record in the kind's display order.
    async fn list(&self) -> Result<Vec<E>, AppError>;
    async fn find(&self, id: &Uuid) -> Result<Option<E>, AppError>;
    async fn insert(&self, draft: &E::Draft) -> Result<E, AppError>;
    /// `NotFound` when `id` is unknown.
    async fn update(&self, id: &Uuid, draft: &E::Draft) -> Result<E, AppError>;
    /// `NotFound` when `id` is unknown.
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// One page ordered by publication date, newest first, plus the total count.
    async fn list_page(&self, page: &PageRequest) -> Result<(Vec<Article>, i64), AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, AppError>;
    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError>;
    async fn insert(&self, draft: &ArticleDraft) -> Result<Article, AppError>;
    async fn update(&self, id: &Uuid, draft: &ArticleDraft) -> Result<Article, AppError>;
    async fn delete_by_slug(&self, slug: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SingletonRepository<E: SingletonEntity>: Send + Sync {
    /// `None` until the first save.
    async fn load(&self) -> Result<Option<E>, AppError>;
    /// Create-or-replace at the fixed key.
    async fn save(&self, content: &E) -> Result<E, AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Ok,
    Unavailable,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Ok => "OK",
            StoreStatus::Unavailable => "Unavailable",
        }
    }
}

#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn check_connection(&self) -> StoreStatus;
}

/// Everything the site persists, behind one handle.
pub trait ContentStore:
    CollectionRepository<Service>
    + CollectionRepository<Technology>
    + CollectionRepository<Recommendation>
    + ArticleRepository
    + SingletonRepository<HeroContent>
    + SingletonRepository<AboutContent>
    + StoreHealth
    + 'static
{
}

impl<T> ContentStore for T where
    T: CollectionRepository<Service>
        + CollectionRepository<Technology>
        + CollectionRepository<Recommendation>
        + ArticleRepository
        + SingletonRepository<HeroContent>
        + SingletonRepository<AboutContent>
        + StoreHealth
        + 'static
{
}
