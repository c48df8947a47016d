use crate::models::DbBooking;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Bookings for one provider whose start falls in the half-open range
/// `[from, to)`, ordered by start ascending. All statuses are returned;
/// filtering busy ones is the engine's concern.
pub async fn get_bookings_in_range(
    pool: &Pool<Postgres>,
    store_id: Uuid,
    provider_id: Uuid,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, store_id, provider_id, start_time, end_time, status, created_at
        FROM bookings
        WHERE store_id = $1
          AND provider_id = $2
          AND start_time >= $3
          AND start_time < $4
        ORDER BY start_time ASC
        "#,
    )
    .bind(store_id)
    .bind(provider_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}
