use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, utils};

use auth::{cookie::SessionCookie, jwt::JwtService};
use entities::{
    about::AboutContent, content::{CollectionEntity, SingletonEntity}, hero::HeroContent,
    recommendation::Recommendation, service::Service, technology::Technology,
};
use repositories::content::{ContentStore, StoreHealth};
use use_cases::{
    articles::ArticleHandler, collection::CollectionHandler, session::SessionIssuer,
    singleton::SingletonHandler,
};

pub struct AppState {
    pub hero: SingletonHandler<HeroContent>,
    pub about: SingletonHandler<AboutContent>,
    pub services: CollectionHandler<Service>,
    pub technologies: CollectionHandler<Technology>,
    pub recommendations: CollectionHandler<Recommendation>,
    pub articles: ArticleHandler,
    pub sessions: AppSessionIssuer,
    pub session_cookie: SessionCookie,
    pub store: Arc<dyn StoreHealth>,
}

pub type AppSessionIssuer = SessionIssuer<JwtService>;

impl AppState {
    pub fn new<S>(config: &settings::AppConfig, store: Arc<S>) -> Self
    where
        S: ContentStore,
    {
        AppState {
            hero: SingletonHandler::<HeroContent>::new(store.clone()),
            about: SingletonHandler::<AboutContent>::new(store.clone()),
            services: CollectionHandler::<Service>::new(store.clone()),
            technologies: CollectionHandler::<Technology>::new(store.clone()),
            recommendations: CollectionHandler::<Recommendation>::new(store.clone()),
            articles: ArticleHandler::new(store.clone(), config.default_author.clone()),
            sessions: SessionIssuer::new(config, JwtService::new(config)),
            session_cookie: SessionCookie::new(config),
            store,
        }
    }
}

/// Picks the handler for a list-shaped content kind off the shared state.
pub trait HasCollection<E: CollectionEntity> {
    fn collection(&self) -> &CollectionHandler<E>;
}

impl HasCollection<Service> for AppState {
    fn collection(&self) -> &CollectionHandler<Service> {
        &self.services
    }
}

impl HasCollection<Technology> for AppState {
    fn collection(&self) -> &CollectionHandler<Technology> {
        &self.technologies
    }
}

impl HasCollection<Recommendation> for AppState {
    fn collection(&self) -> &CollectionHandler<Recommendation> {
        &self.recommendations
    }
}

pub trait HasSingleton<E: SingletonEntity> {
    fn singleton(&self) -> &SingletonHandler<E>;
}

impl HasSingleton<HeroContent> for AppState {
    fn singleton(&self) -> &SingletonHandler<HeroContent> {
        &self.hero
    }
}

impl HasSingleton<AboutContent> for AppState {
    fn singleton(&self) -> &SingletonHandler<AboutContent> {
        &self.about
    }
}
