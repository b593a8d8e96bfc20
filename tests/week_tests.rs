use chrono::{Datelike, Local, NaiveDate, TimeZone, Weekday};
use weekfill::core::week::{WeekContext, monday_of};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn monday_of_weekdays() {
    // 2025-06-02 is a Monday
    assert_eq!(monday_of(d(2025, 6, 2)), d(2025, 6, 2));
    assert_eq!(monday_of(d(2025, 6, 4)), d(2025, 6, 2)); // Wednesday
    assert_eq!(monday_of(d(2025, 6, 6)), d(2025, 6, 2)); // Friday
    assert_eq!(monday_of(d(2025, 6, 7)), d(2025, 6, 2)); // Saturday
}

#[test]
fn monday_of_sunday_goes_back_six_days() {
    // 2025-06-08 is a Sunday; its week opened on 2025-06-02
    assert_eq!(monday_of(d(2025, 6, 8)), d(2025, 6, 2));
}

#[test]
fn monday_of_is_idempotent() {
    let mut day = d(2024, 12, 23);
    // every day across a year boundary
    for _ in 0..60 {
        let monday = monday_of(day);
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert_eq!(monday_of(monday), monday);
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn week_context_day_offsets() {
    let week = WeekContext::for_today(d(2025, 6, 5)); // Thursday
    assert_eq!(week.monday, d(2025, 6, 2));
    assert_eq!(week.day(0), d(2025, 6, 2));
    assert_eq!(week.day(4), d(2025, 6, 6));
}

#[test]
fn day_timestamp_is_local_midnight_of_that_day() {
    let week = WeekContext::for_today(d(2025, 6, 5));
    for offset in 0..5 {
        let ts = week.day_timestamp_ms(offset);
        let resolved = Local.timestamp_millis_opt(ts).single().unwrap();
        assert_eq!(resolved.date_naive(), week.day(offset));
        assert_eq!(resolved.time(), chrono::NaiveTime::MIN);
    }
}
