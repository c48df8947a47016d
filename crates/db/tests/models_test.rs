use chrono::{Duration, NaiveTime, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotwise_core::models::{BookingStatus, StoreConfig, WeeklyHours};
use slotwise_db::models::{DbBooking, DbStoreConfig, DbWeeklyHours};
use uuid::Uuid;

fn db_booking(status: &str) -> DbBooking {
    let start = Utc::now();
    DbBooking {
        id: Uuid::new_v4(),
        store_id: Uuid::new_v4(),
        provider_id: Uuid::new_v4(),
        start_time: start,
        end_time: start + Duration::minutes(30),
        status: status.to_string(),
        created_at: start,
    }
}

#[rstest]
#[case("pending", BookingStatus::Pending)]
#[case("confirmed", BookingStatus::Confirmed)]
#[case("completed", BookingStatus::Completed)]
#[case("cancelled", BookingStatus::Cancelled)]
#[case("no_show", BookingStatus::NoShow)]
fn test_booking_status_mapping(#[case] raw: &str, #[case] expected: BookingStatus) {
    let record = db_booking(raw).into_record().expect("known status");
    assert_eq!(record.status, expected);
}

#[test]
fn test_unknown_booking_status_is_rejected() {
    let result = db_booking("tentative").into_record();
    assert!(result.is_err());
}

#[test]
fn test_store_row_conversion() {
    let row = DbStoreConfig {
        id: Uuid::new_v4(),
        timezone: "Europe/Madrid".to_string(),
        slot_step_minutes: None,
        buffer_before_minutes: 5,
        buffer_after_minutes: 0,
        created_at: Utc::now(),
    };

    let store: StoreConfig = row.clone().into();
    assert_eq!(store.id, row.id);
    assert_eq!(store.timezone, "Europe/Madrid");
    assert_eq!(store.slot_step_minutes, None);
    assert_eq!(store.buffer_before_minutes, 5);
}

#[test]
fn test_weekly_hours_row_conversion() {
    let row = DbWeeklyHours {
        store_id: Uuid::new_v4(),
        day_of_week: 6,
        is_closed: false,
        open_time: NaiveTime::from_hms_opt(10, 0, 0),
        close_time: NaiveTime::from_hms_opt(14, 0, 0),
    };

    let hours: WeeklyHours = row.clone().into();
    assert_eq!(hours.day_of_week, 6);
    assert_eq!(hours.open_window(), Some((row.open_time.unwrap(), row.close_time.unwrap())));
}
