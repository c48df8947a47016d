use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create stores table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stores (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            timezone VARCHAR(64) NOT NULL DEFAULT 'UTC',
            slot_step_minutes BIGINT NULL,
            buffer_before_minutes BIGINT NOT NULL DEFAULT 0,
            buffer_after_minutes BIGINT NOT NULL DEFAULT 0,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_slot_step CHECK (slot_step_minutes IS NULL OR slot_step_minutes >= 5)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create weekly_hours table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weekly_hours (
            store_id UUID NOT NULL REFERENCES stores(id),
            day_of_week SMALLINT NOT NULL,
            is_closed BOOLEAN NOT NULL DEFAULT FALSE,
            open_time TIME NULL,
            close_time TIME NULL,
            PRIMARY KEY (store_id, day_of_week),
            CONSTRAINT valid_day_of_week CHECK (day_of_week BETWEEN 0 AND 6),
            CONSTRAINT valid_window CHECK (
                open_time IS NULL OR close_time IS NULL OR close_time > open_time
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            store_id UUID NOT NULL REFERENCES stores(id),
            name VARCHAR(255) NOT NULL,
            duration_minutes BIGINT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create providers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS providers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            store_id UUID NOT NULL REFERENCES stores(id),
            name VARCHAR(255) NOT NULL,
            capacity BIGINT NOT NULL DEFAULT 1,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_capacity CHECK (capacity >= 1)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            store_id UUID NOT NULL REFERENCES stores(id),
            provider_id UUID NOT NULL REFERENCES providers(id),
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'pending',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT valid_status CHECK (
                status IN ('pending', 'confirmed', 'completed', 'cancelled', 'no_show')
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Range scans over one provider's horizon drive the availability engine
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_provider_start
        ON bookings (store_id, provider_id, start_time);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
