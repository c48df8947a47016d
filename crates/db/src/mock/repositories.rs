use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, DbProvider, DbService, DbStoreConfig, DbWeeklyHours};

// Mock repositories for testing

mock! {
    pub StoreRepo {
        pub async fn get_store_config(
            &self,
            store_id: Uuid,
        ) -> eyre::Result<Option<DbStoreConfig>>;

        pub async fn get_weekly_hours(
            &self,
            store_id: Uuid,
        ) -> eyre::Result<Vec<DbWeeklyHours>>;
    }
}

mock! {
    pub CatalogRepo {
        pub async fn get_service(
            &self,
            service_id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn get_provider(
            &self,
            provider_id: Uuid,
        ) -> eyre::Result<Option<DbProvider>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn get_bookings_in_range(
            &self,
            store_id: Uuid,
            provider_id: Uuid,
            from: DateTime<Utc>,
            to: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbBooking>>;
    }
}
