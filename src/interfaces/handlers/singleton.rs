use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::content::SingletonEntity, errors::AppError, AppState, HasSingleton};

#[instrument(skip(state), fields(kind = E::LABEL))]
pub async fn get_content<E>(state: web::Data<AppState>) -> Result<impl Responder, AppError>
where
    E: SingletonEntity,
    AppState: HasSingleton<E>,
{
    let content = state.singleton().get().await?;
    Ok(HttpResponse::Ok().json(content))
}

#[instrument(skip(state, data), fields(kind = E::LABEL))]
pub async fn put_content<E>(
    state: web::Data<AppState>,
    data: web::Json<E::Input>,
) -> Result<impl Responder, AppError>
where
    E: SingletonEntity,
    AppState: HasSingleton<E>,
{
    let saved = state.singleton().upsert(data.into_inner()).await?;
    Ok(HttpResponse::Ok().json(saved))
}
