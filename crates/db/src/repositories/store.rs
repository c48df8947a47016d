use crate::models::{DbStoreConfig, DbWeeklyHours};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_store_config(
    pool: &Pool<Postgres>,
    store_id: Uuid,
) -> Result<Option<DbStoreConfig>> {
    let store = sqlx::query_as::<_, DbStoreConfig>(
        r#"
        SELECT id, timezone, slot_step_minutes, buffer_before_minutes,
               buffer_after_minutes, created_at
        FROM stores
        WHERE id = $1
        "#,
    )
    .bind(store_id)
    .fetch_optional(pool)
    .await?;

    Ok(store)
}

pub async fn get_weekly_hours(
    pool: &Pool<Postgres>,
    store_id: Uuid,
) -> Result<Vec<DbWeeklyHours>> {
    let hours = sqlx::query_as::<_, DbWeeklyHours>(
        r#"
        SELECT store_id, day_of_week, is_closed, open_time, close_time
        FROM weekly_hours
        WHERE store_id = $1
        ORDER BY day_of_week ASC
        "#,
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;

    Ok(hours)
}
