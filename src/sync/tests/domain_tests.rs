//! Domain-focused tests for record merging and value validation.

use crate::sync::domain::{
    DueDate, Hours, PartialRecord, Priority, TaskDocument, TaskDomainError, TaskId, TaskListId,
    TaskRecord, TimeTracking,
};
use chrono::{NaiveDate, NaiveTime};
use rstest::rstest;

fn day(year: i32, month: u32, day_of_month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day_of_month).expect("valid date")
}

fn hours(value: f64) -> Hours {
    Hours::new(value).expect("valid hours")
}

fn partial(id: &str, name: &str, due_day: Option<NaiveDate>) -> PartialRecord {
    PartialRecord {
        id: TaskId::new(id).expect("valid task id"),
        task_list_id: TaskListId::default_list(),
        name: name.to_owned(),
        due_day,
    }
}

#[rstest]
#[case("low", Priority::Low)]
#[case("medium", Priority::Medium)]
#[case("high", Priority::High)]
#[case(" High ", Priority::High)]
fn priority_parses_canonical_values(#[case] raw: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(raw).expect("valid priority"), expected);
}

#[rstest]
fn priority_rejects_unknown_values() {
    let result = Priority::try_from("urgent");
    assert_eq!(
        result,
        Err(TaskDomainError::UnknownPriority("urgent".to_owned()))
    );
}

#[rstest]
#[case(-1.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn hours_rejects_invalid_values(#[case] value: f64) {
    assert!(Hours::new(value).is_err());
}

#[rstest]
fn hours_accepts_fractional_values() {
    assert_eq!(hours(1.5).value(), 1.5);
}

#[rstest]
#[case(10.0, 12.0, 0.0)]
#[case(10.0, 4.0, 6.0)]
#[case(3.0, 0.0, 3.0)]
fn remaining_time_saturates_at_zero(#[case] estimate: f64, #[case] spent: f64, #[case] left: f64) {
    let tracking = TimeTracking::new(hours(estimate), hours(spent));
    assert_eq!(tracking.remaining(), hours(left));
}

#[rstest]
fn time_tracking_accumulates_and_resets() {
    let mut tracking = TimeTracking::new(hours(8.0), hours(1.0));
    tracking.add_spent(hours(2.5));
    assert_eq!(tracking.spent(), hours(3.5));
    tracking.reset_spent();
    assert_eq!(tracking.spent(), Hours::ZERO);
    assert_eq!(tracking.remaining(), hours(8.0));
}

#[rstest]
fn due_time_splices_onto_date_only_value() {
    let date_only = DueDate::Day(day(2022, 4, 5));
    let merged = date_only.merge_time(NaiveTime::from_hms_opt(17, 23, 42).expect("valid time"));
    assert_eq!(merged.to_string(), "2022-04-05T17:23:42");
    assert_eq!(merged.day(), day(2022, 4, 5));
}

#[rstest]
fn enrichment_without_due_time_keeps_date_only_deadline() {
    let record = TaskRecord::from_enrichment(
        partial("t-1", "Write report", Some(day(2022, 4, 5))),
        &TaskDocument::default(),
    );
    assert_eq!(record.due(), Some(&DueDate::Day(day(2022, 4, 5))));
}

#[rstest]
fn enrichment_with_due_time_yields_full_deadline() {
    let document = TaskDocument {
        due_time: NaiveTime::from_hms_opt(17, 23, 42),
        ..TaskDocument::default()
    };
    let record =
        TaskRecord::from_enrichment(partial("t-1", "Write report", Some(day(2022, 4, 5))), &document);
    let due = record.due().expect("deadline should be set");
    assert_eq!(due.to_string(), "2022-04-05T17:23:42");
}

#[rstest]
fn enrichment_without_estimate_suppresses_time_tracking() {
    let document = TaskDocument {
        spent: hours(5.0),
        ..TaskDocument::default()
    };
    let record = TaskRecord::from_enrichment(partial("t-1", "Untracked", None), &document);
    assert!(record.time().is_none());
}

#[rstest]
fn enrichment_with_estimate_carries_spent_hours() {
    let document = TaskDocument {
        priority: Priority::High,
        estimate: Some(hours(10.0)),
        spent: hours(4.0),
        ..TaskDocument::default()
    };
    let record = TaskRecord::from_enrichment(partial("t-1", "Tracked", None), &document);
    let tracking = record.time().expect("time tracking should be present");
    assert_eq!(tracking.remaining(), hours(6.0));
    assert_eq!(record.priority(), Priority::High);
}

#[rstest]
fn record_construction_rejects_blank_names() {
    let result = TaskRecord::new(
        TaskId::new("t-1").expect("valid task id"),
        TaskListId::default_list(),
        "   ",
        None,
        Priority::Low,
        None,
        Hours::ZERO,
    );
    assert_eq!(result, Err(TaskDomainError::EmptyTaskName));
}

#[rstest]
fn record_construction_discards_spent_without_estimate() {
    let record = TaskRecord::new(
        TaskId::new("t-1").expect("valid task id"),
        TaskListId::default_list(),
        "Untracked",
        None,
        Priority::Low,
        None,
        hours(7.0),
    )
    .expect("valid record");
    assert!(record.time().is_none());
}

#[rstest]
fn mutating_time_without_estimate_is_rejected() {
    let mut record = TaskRecord::new(
        TaskId::new("t-1").expect("valid task id"),
        TaskListId::default_list(),
        "Untracked",
        None,
        Priority::Low,
        None,
        Hours::ZERO,
    )
    .expect("valid record");
    assert!(matches!(
        record.add_time_spent(hours(1.0)),
        Err(TaskDomainError::TimeTrackingDisabled(_))
    ));
}

#[rstest]
fn records_serialize_with_snake_case_fields() {
    let document = TaskDocument {
        priority: Priority::High,
        estimate: Some(hours(10.0)),
        due_time: NaiveTime::from_hms_opt(17, 23, 42),
        ..TaskDocument::default()
    };
    let record =
        TaskRecord::from_enrichment(partial("t-1", "Tracked", Some(day(2022, 4, 5))), &document);

    let value = serde_json::to_value(&record).expect("record should serialise");

    assert_eq!(
        value.get("priority"),
        Some(&serde_json::json!("high"))
    );
    assert_eq!(
        value.get("due").and_then(|due| due.get("kind")),
        Some(&serde_json::json!("moment"))
    );
    let parsed: TaskRecord = serde_json::from_value(value).expect("record should deserialise");
    assert_eq!(parsed, record);
}

#[rstest]
fn identifiers_reject_blank_values() {
    assert_eq!(TaskId::new("  "), Err(TaskDomainError::EmptyTaskId));
    assert_eq!(TaskListId::new(""), Err(TaskDomainError::EmptyTaskListId));
}

#[rstest]
fn default_list_is_the_at_default_alias() {
    assert_eq!(TaskListId::default_list().as_str(), "@default");
}
