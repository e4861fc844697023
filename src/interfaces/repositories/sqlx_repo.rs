use async_trait::async_trait;
use sqlx::{
    postgres::PgRow,
    query_builder::Separated,
    FromRow, PgPool, Postgres, QueryBuilder,
};
use uuid::Uuid;

use crate::{
    constants::SINGLETON_ROW_ID,
    entities::content::{CollectionEntity, SingletonEntity},
    errors::{conflict_on, AppError},
    repositories::content::{CollectionRepository, SingletonRepository, StoreHealth, StoreStatus},
};

#[derive(Clone)]
pub struct SqlxContentRepo {
    pub pool: PgPool,
}

impl SqlxContentRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContentRepo { pool }
    }
}

#[async_trait]
impl StoreHealth for SqlxContentRepo {
    async fn check_connection(&self) -> StoreStatus {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => StoreStatus::Ok,
            Err(e) => {
                tracing::warn!("Database health check failed: {}", e);
                StoreStatus::Unavailable
            }
        }
    }
}

/// A column value handed to the query builder.
pub enum Bind {
    Text(String),
    NullableText(Option<String>),
}

fn push_value(target: &mut Separated<'_, '_, Postgres, &'static str>, value: Bind) {
    match value {
        Bind::Text(v) => target.push_bind(v),
        Bind::NullableText(v) => target.push_bind(v),
    };
}

fn push_assignment(target: &mut Separated<'_, '_, Postgres, &'static str>, column: &str, value: Bind) {
    target.push(format!("{} = ", column));
    match value {
        Bind::Text(v) => target.push_bind_unseparated(v),
        Bind::NullableText(v) => target.push_bind_unseparated(v),
    };
}

/// Table layout of a list-shaped content kind. `id`, `created_at` and
/// `updated_at` are managed here and never appear in `columns`.
pub trait PgRecord: CollectionEntity + for<'r> FromRow<'r, PgRow> {
    const TABLE: &'static str;
    const ORDER_BY: &'static str;
    /// `(constraint, message)` reported as a conflict on write.
    const UNIQUE: Option<(&'static str, &'static str)> = None;

    fn columns(draft: &Self::Draft) -> Vec<(&'static str, Bind)>;
}

fn write_error<E: PgRecord>(err: sqlx::Error) -> AppError {
    match E::UNIQUE {
        Some((constraint, message)) => conflict_on(constraint, message)(err),
        None => AppError::from(err),
    }
}

#[async_trait]
impl<E> CollectionRepository<E> for SqlxContentRepo
where
    E: PgRecord,
{
    async fn list(&self) -> Result<Vec<E>, AppError> {
        let sql = format!("SELECT * FROM {} ORDER BY {}", E::TABLE, E::ORDER_BY);
        let records = sqlx::query_as::<_, E>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn find(&self, id: &Uuid) -> Result<Option<E>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", E::TABLE);
        let record = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    async fn insert(&self, draft: &E::Draft) -> Result<E, AppError> {
        let columns = E::columns(draft);

        let mut builder = QueryBuilder::<Postgres>::new(format!("INSERT INTO {} (", E::TABLE));
        let mut names = builder.separated(", ");
        names.push("id");
        for (name, _) in &columns {
            names.push(*name);
        }

        builder.push(") VALUES (");
        let mut values = builder.separated(", ");
        values.push_bind(Uuid::new_v4());
        for (_, value) in columns {
            push_value(&mut values, value);
        }
        builder.push(") RETURNING *");

        builder
            .build_query_as::<E>()
            .fetch_one(&self.pool)
            .await
            .map_err(write_error::<E>)
    }

    async fn update(&self, id: &Uuid, draft: &E::Draft) -> Result<E, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", E::TABLE));
        let mut assignments = builder.separated(", ");
        for (name, value) in E::columns(draft) {
            push_assignment(&mut assignments, name, value);
        }
        assignments.push("updated_at = NOW()");

        builder.push(" WHERE id = ").push_bind(*id).push(" RETURNING *");

        builder
            .build_query_as::<E>()
            .fetch_optional(&self.pool)
            .await
            .map_err(write_error::<E>)?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", E::LABEL)))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} not found", E::LABEL)));
        }

        Ok(())
    }
}

/// Table layout of a single-row content kind.
pub trait PgSingleton: SingletonEntity + for<'r> FromRow<'r, PgRow> {
    const TABLE: &'static str;

    fn columns(&self) -> Vec<(&'static str, String)>;
}

#[async_trait]
impl<E> SingletonRepository<E> for SqlxContentRepo
where
    E: PgSingleton,
{
    async fn load(&self) -> Result<Option<E>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", E::TABLE);
        let content = sqlx::query_as::<_, E>(&sql)
            .bind(SINGLETON_ROW_ID)
            .fetch_optional(&self.pool)
            .await?;

        Ok(content)
    }

    async fn save(&self, content: &E) -> Result<E, AppError> {
        let columns = content.columns();

        let mut builder = QueryBuilder::<Postgres>::new(format!("INSERT INTO {} (", E::TABLE));
        let mut names = builder.separated(", ");
        names.push("id");
        for (name, _) in &columns {
            names.push(*name);
        }

        builder.push(") VALUES (");
        let mut values = builder.separated(", ");
        values.push_bind(SINGLETON_ROW_ID);
        for (_, value) in &columns {
            values.push_bind(value.clone());
        }

        builder.push(") ON CONFLICT (id) DO UPDATE SET ");
        let mut assignments = builder.separated(", ");
        for (name, _) in &columns {
            assignments.push(format!("{0} = EXCLUDED.{0}", name));
        }
        assignments.push("updated_at = NOW()");
        builder.push(" RETURNING *");

        let saved = builder
            .build_query_as::<E>()
            .fetch_one(&self.pool)
            .await?;

        Ok(saved)
    }
}
