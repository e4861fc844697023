pub mod article;
pub mod collections;
pub mod content;
pub mod singletons;
pub mod sqlx_repo;
pub mod token;
