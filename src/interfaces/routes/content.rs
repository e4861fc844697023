use actix_web::web;

use crate::{
    entities::{
        about::AboutContent, content::CollectionEntity, hero::HeroContent,
        recommendation::Recommendation, service::Service, technology::Technology,
    },
    handlers::{articles, collection, singleton},
    AppState, HasCollection,
};

/// Read-only content for the public site, mounted under `/content`.
pub fn config_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/content")
            .service(web::resource("/hero").route(web::get().to(singleton::get_content::<HeroContent>)))
            .service(web::resource("/about").route(web::get().to(singleton::get_content::<AboutContent>)))
            .configure(read_only::<Service>("/services"))
            .configure(read_only::<Technology>("/technologies"))
            .configure(read_only::<Recommendation>("/recommendations"))
            .service(web::resource("/articles").route(web::get().to(articles::list_articles)))
            .service(web::resource("/articles/{slug}").route(web::get().to(articles::get_article))),
    );
}

/// Full content management, mounted under `/admin/content`.
pub fn config_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/content")
            .service(
                web::resource("/hero")
                    .route(web::get().to(singleton::get_content::<HeroContent>))
                    .route(web::put().to(singleton::put_content::<HeroContent>)),
            )
            .service(
                web::resource("/about")
                    .route(web::get().to(singleton::get_content::<AboutContent>))
                    .route(web::put().to(singleton::put_content::<AboutContent>)),
            )
            .configure(read_write::<Service>("/services"))
            .configure(read_write::<Technology>("/technologies"))
            .configure(read_write::<Recommendation>("/recommendations"))
            .service(
                web::resource("/articles")
                    .route(web::get().to(articles::list_articles))
                    .route(web::post().to(articles::create_article)),
            )
            .service(
                web::resource("/articles/{slug}")
                    .route(web::get().to(articles::get_article))
                    .route(web::put().to(articles::update_article))
                    .route(web::delete().to(articles::delete_article)),
            ),
    );
}

fn read_only<E>(path: &'static str) -> impl FnOnce(&mut web::ServiceConfig)
where
    E: CollectionEntity,
    AppState: HasCollection<E>,
{
    move |cfg| {
        cfg.service(web::resource(path).route(web::get().to(collection::list_items::<E>)))
            .service(
                web::resource(format!("{}/{{id}}", path))
                    .route(web::get().to(collection::get_item::<E>)),
            );
    }
}

fn read_write<E>(path: &'static str) -> impl FnOnce(&mut web::ServiceConfig)
where
    E: CollectionEntity,
    AppState: HasCollection<E>,
{
    move |cfg| {
        cfg.service(
            web::resource(path)
                .route(web::get().to(collection::list_items::<E>))
                .route(web::post().to(collection::create_item::<E>)),
        )
        .service(
            web::resource(format!("{}/{{id}}", path))
                .route(web::get().to(collection::get_item::<E>))
                .route(web::put().to(collection::update_item::<E>))
                .route(web::delete().to(collection::delete_item::<E>)),
        );
    }
}
