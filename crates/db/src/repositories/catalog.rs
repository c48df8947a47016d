use crate::models::{DbProvider, DbService};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Service and provider lookups for the booking flow.

pub async fn get_service(pool: &Pool<Postgres>, service_id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, store_id, name, duration_minutes, created_at
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(service_id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn get_provider(pool: &Pool<Postgres>, provider_id: Uuid) -> Result<Option<DbProvider>> {
    let provider = sqlx::query_as::<_, DbProvider>(
        r#"
        SELECT id, store_id, name, capacity, created_at
        FROM providers
        WHERE id = $1
        "#,
    )
    .bind(provider_id)
    .fetch_optional(pool)
    .await?;

    Ok(provider)
}
