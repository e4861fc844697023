use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::content::CollectionEntity, errors::AppError, AppState, HasCollection};

#[instrument(skip(state), fields(kind = E::LABEL))]
pub async fn list_items<E>(state: web::Data<AppState>) -> Result<impl Responder, AppError>
where
    E: CollectionEntity,
    AppState: HasCollection<E>,
{
    let items = state.collection().list().await?;
    Ok(HttpResponse::Ok().json(items))
}

#[instrument(skip(state, id), fields(kind = E::LABEL))]
pub async fn get_item<E>(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError>
where
    E: CollectionEntity,
    AppState: HasCollection<E>,
{
    let item = state.collection().get(&id).await?;
    Ok(HttpResponse::Ok().json(item))
}

#[instrument(skip(state, data), fields(kind = E::LABEL))]
pub async fn create_item<E>(
    state: web::Data<AppState>,
    data: web::Json<E::Input>,
) -> Result<impl Responder, AppError>
where
    E: CollectionEntity,
    AppState: HasCollection<E>,
{
    let created = state.collection().create(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[instrument(skip(state, id, data), fields(kind = E::LABEL))]
pub async fn update_item<E>(
    id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<E::Input>,
) -> Result<impl Responder, AppError>
where
    E: CollectionEntity,
    AppState: HasCollection<E>,
{
    let updated = state.collection().update(&id, data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

#[instrument(skip(state, id), fields(kind = E::LABEL))]
pub async fn delete_item<E>(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError>
where
    E: CollectionEntity,
    AppState: HasCollection<E>,
{
    state.collection().delete(&id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("{} deleted successfully", E::LABEL)
    })))
}
