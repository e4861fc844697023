pub mod about;
pub mod article;
pub mod content;
pub mod hero;
pub mod pagination;
pub mod recommendation;
pub mod service;
pub mod session;
pub mod technology;
