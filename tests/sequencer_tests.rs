use chrono::NaiveDate;
use weekfill::core::sequencer::fill_week;
use weekfill::core::store::BookingStore;
use weekfill::core::week::WeekContext;
use weekfill::driver::FieldId;
use weekfill::driver::script::{DriverOp, ScriptDriver};
use weekfill::models::booking::{BookingEntry, DayBooking};
use weekfill::models::row::RemoteRowLabel;

fn week() -> WeekContext {
    // 2025-06-06 is a Friday
    WeekContext::for_today(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap())
}

fn booking(day_offset: usize, time: &str, comment: &str) -> BookingEntry {
    let mut e = BookingEntry::empty("Acme", "Build");
    e.hours[day_offset] = DayBooking {
        time: time.to_string(),
        comment: comment.to_string(),
    };
    e
}

fn rows_for(entries: &[BookingEntry]) -> Vec<RemoteRowLabel> {
    entries
        .iter()
        .enumerate()
        .map(|(k, e)| RemoteRowLabel {
            row_index: k,
            project: e.project.clone(),
            task: e.task.clone(),
        })
        .collect()
}

fn run(entries: Vec<BookingEntry>) -> (Vec<DriverOp>, weekfill::core::sequencer::FillReport) {
    let rows = rows_for(&entries);
    let store = BookingStore::new(entries);
    let mut driver = ScriptDriver::new(rows);
    let report = fill_week(&mut driver, &store, &week()).unwrap();
    (driver.into_ops(), report)
}

#[test]
fn field_id_encoding_is_sheet_row_column_sub() {
    assert_eq!(FieldId::hours(0, 0).to_string(), "0_0_5_0");
    assert_eq!(FieldId::minutes(0, 0).to_string(), "0_0_5_1");
    assert_eq!(FieldId::hours(3, 4).to_string(), "0_3_9_0");
    assert_eq!(FieldId::minutes(3, 2).to_string(), "0_3_7_1");
}

#[test]
fn one_populated_day_issues_the_exact_op_sequence() {
    let (ops, report) = run(vec![booking(1, "2:15", "reviews, ")]);

    assert_eq!(
        ops,
        vec![
            DriverOp::WriteField {
                field: "0_0_6_0".to_string(),
                text: "2".to_string(),
            },
            DriverOp::WriteField {
                field: "0_0_6_1".to_string(),
                text: "15".to_string(),
            },
            DriverOp::OpenCommentEditor {
                row_index: 0,
                day_timestamp_ms: week().day_timestamp_ms(1),
            },
            DriverOp::TypeText {
                text: "reviews, ".to_string(),
            },
            DriverOp::CommitAndCloseEditor,
            DriverOp::ApplyAndPersist,
        ]
    );
    assert_eq!(report.written_days, 1);
    assert_eq!(report.skipped_days, 4);
}

#[test]
fn hour_and_minute_digits_are_typed_verbatim() {
    let (ops, _) = run(vec![booking(0, "10:05", "x, ")]);
    assert_eq!(
        ops[0],
        DriverOp::WriteField {
            field: "0_0_5_0".to_string(),
            text: "10".to_string(),
        }
    );
    assert_eq!(
        ops[1],
        DriverOp::WriteField {
            field: "0_0_5_1".to_string(),
            text: "05".to_string(),
        }
    );
}

#[test]
fn scenario_b_zero_duration_suppresses_the_day_even_with_a_comment() {
    let (ops, report) = run(vec![booking(2, "0:00", "worked a bit")]);
    assert_eq!(ops, vec![DriverOp::ApplyAndPersist]);
    assert_eq!(report.written_days, 0);
    assert_eq!(report.skipped_days, 5);
}

#[test]
fn scenario_c_empty_comment_suppresses_the_day_even_with_a_duration() {
    let (ops, _) = run(vec![booking(0, "2:15", "")]);
    assert_eq!(ops, vec![DriverOp::ApplyAndPersist]);
}

#[test]
fn unparseable_times_are_skipped() {
    for time in ["", "2", ":30", "2:", "two:30", "2:thirty"] {
        let (ops, _) = run(vec![booking(0, time, "comment, ")]);
        assert_eq!(ops, vec![DriverOp::ApplyAndPersist], "time {time:?}");
    }
}

#[test]
fn days_are_filled_in_offset_order_and_rows_sequentially() {
    let mut first = BookingEntry::empty("Acme", "Build");
    first.hours[4] = DayBooking {
        time: "1:00".to_string(),
        comment: "fri, ".to_string(),
    };
    first.hours[0] = DayBooking {
        time: "1:00".to_string(),
        comment: "mon, ".to_string(),
    };
    let mut second = BookingEntry::empty("Globex", "Ops");
    second.hours[2] = DayBooking {
        time: "0:45".to_string(),
        comment: "wed, ".to_string(),
    };

    let (ops, report) = run(vec![first, second]);

    let fields: Vec<String> = ops
        .iter()
        .filter_map(|op| match op {
            DriverOp::WriteField { field, .. } => Some(field.clone()),
            _ => None,
        })
        .collect();
    let expected: Vec<String> = ["0_0_5_0", "0_0_5_1", "0_0_9_0", "0_0_9_1", "0_1_7_0", "0_1_7_1"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(fields, expected);

    // the whole week is persisted exactly once, at the end
    let applies = ops
        .iter()
        .filter(|op| matches!(op, DriverOp::ApplyAndPersist))
        .count();
    assert_eq!(applies, 1);
    assert_eq!(ops.last(), Some(&DriverOp::ApplyAndPersist));
    assert_eq!(report.matched_rows, 2);
    assert_eq!(report.written_days, 3);
}

#[test]
fn unmatched_remote_rows_produce_no_writes() {
    let entries = vec![booking(0, "1:00", "mon, ")];
    let mut rows = rows_for(&entries);
    rows.push(RemoteRowLabel {
        row_index: 1,
        project: "Globex".to_string(),
        task: "Ops".to_string(),
    });

    let store = BookingStore::new(entries);
    let mut driver = ScriptDriver::new(rows);
    let report = fill_week(&mut driver, &store, &week()).unwrap();

    assert_eq!(report.matched_rows, 1);
    assert!(
        driver
            .ops()
            .iter()
            .all(|op| !matches!(op, DriverOp::OpenCommentEditor { row_index: 1, .. }))
    );
}

#[test]
fn write_parts_accepts_wide_hour_counts() {
    let day = DayBooking {
        time: "40:00".to_string(),
        comment: "week in one cell, ".to_string(),
    };
    assert_eq!(day.write_parts(), Some(("40", "00")));
}
