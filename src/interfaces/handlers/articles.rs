use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{article::ArticleInput, pagination::PaginationParams},
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_articles(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<impl Responder, AppError> {
    let page = state.articles.list(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

#[instrument(skip(state))]
pub async fn get_article(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let article = state.articles.get(&slug).await?;
    Ok(HttpResponse::Ok().json(article))
}

#[instrument(skip(state, data))]
pub async fn create_article(
    state: web::Data<AppState>,
    data: web::Json<ArticleInput>,
) -> Result<impl Responder, AppError> {
    let article = state.articles.create(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(article))
}

#[instrument(skip(state, data))]
pub async fn update_article(
    slug: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ArticleInput>,
) -> Result<impl Responder, AppError> {
    let article = state.articles.update(&slug, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(article))
}

#[instrument(skip(state))]
pub async fn delete_article(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.articles.delete(&slug).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Article deleted successfully"
    })))
}
