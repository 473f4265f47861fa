use chrono::{NaiveDate, Utc};
use reqboard_core::{
    calendar_day, calendar_month, dashboard_groups, due_state, stat_counts, DueState, EventKind,
    Request, RequestDraft, Status, StatusFilter,
};

fn request(client: &str, summary: &str, received: &str, status: Status, reminder_days: i64) -> Request {
    let draft = RequestDraft {
        received_date: received.to_string(),
        client_name: client.to_string(),
        summary: summary.to_string(),
        status,
        reminder_days: Some(reminder_days),
    };
    Request::create(&draft, Utc::now()).unwrap()
}

fn day(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

#[test]
fn dashboard_never_includes_done_records() {
    let records = vec![
        request("Acme", "door", "2024-03-05", Status::Done, 7),
        request("Borde", "shelves", "2024-03-06", Status::Active, 7),
    ];
    let today = day("2024-03-10");

    for filter in [StatusFilter::All, StatusFilter::Only(Status::Done)] {
        for search in ["", "acme"] {
            let groups = dashboard_groups(&records, &filter, search, today);
            assert!(groups
                .iter()
                .flat_map(|group| &group.entries)
                .all(|entry| !entry.request.status.is_done()));
        }
    }
}

#[test]
fn status_filter_keeps_only_exact_matches() {
    let records = vec![
        request("Acme", "door", "2024-03-05", Status::Active, 7),
        request("Borde", "shelves", "2024-03-06", Status::Pending, 7),
    ];

    let groups = dashboard_groups(
        &records,
        &StatusFilter::Only(Status::Pending),
        "",
        day("2024-03-10"),
    );

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key, "pending");
    assert_eq!(groups[0].entries[0].request.client_name, "Borde");
}

#[test]
fn search_matches_client_or_summary_case_insensitively() {
    let records = vec![
        request("Acme", "door", "2024-03-05", Status::Active, 7),
        request("Borde", "ACME-branded shelves", "2024-03-06", Status::Active, 7),
        request("Celine", "varnish", "2024-03-07", Status::Active, 7),
    ];

    let groups = dashboard_groups(&records, &StatusFilter::All, "aCmE", day("2024-03-10"));

    let clients: Vec<_> = groups
        .iter()
        .flat_map(|group| &group.entries)
        .map(|entry| entry.request.client_name.as_str())
        .collect();
    assert_eq!(clients, ["Borde", "Acme"]);
}

#[test]
fn empty_label_buckets_as_future_and_custom_labels_form_their_own_groups() {
    let records = vec![
        request("Acme", "door", "2024-03-05", Status::from(String::new()), 7),
        request("Borde", "shelves", "2024-03-06", Status::from("Waiting On Parts".to_string()), 7),
    ];

    let groups = dashboard_groups(&records, &StatusFilter::All, "", day("2024-03-10"));

    let keys: Vec<_> = groups.iter().map(|group| group.key.as_str()).collect();
    assert_eq!(keys, ["future", "Waiting On Parts"]);
}

#[test]
fn groups_keep_first_seen_order_and_sort_entries_by_received_date_desc() {
    let records = vec![
        request("Acme", "a", "2024-03-01", Status::Pending, 7),
        request("Borde", "b", "2024-03-05", Status::Active, 7),
        request("Celine", "c", "2024-03-09", Status::Pending, 7),
        request("Dara", "d", "2024-03-09", Status::Pending, 7),
    ];

    let groups = dashboard_groups(&records, &StatusFilter::All, "", day("2024-03-10"));

    let keys: Vec<_> = groups.iter().map(|group| group.key.as_str()).collect();
    assert_eq!(keys, ["pending", "active"]);

    let pending: Vec<_> = groups[0]
        .entries
        .iter()
        .map(|entry| entry.request.client_name.as_str())
        .collect();
    // Celine and Dara share a date; insertion order breaks the tie.
    assert_eq!(pending, ["Celine", "Dara", "Acme"]);
}

#[test]
fn dashboard_entries_carry_the_due_badge() {
    let records = vec![request("Acme", "door", "2024-03-01", Status::Active, 2)];
    let today = day("2024-03-10");

    let groups = dashboard_groups(&records, &StatusFilter::All, "", today);

    let entry = &groups[0].entries[0];
    assert_eq!(entry.due_state, DueState::Overdue);
    assert_eq!(entry.due_state, due_state(&entry.request, today));
}

#[test]
fn zero_day_reminder_contributes_two_events_to_the_same_day() {
    let records = vec![request("Acme", "door", "2024-03-05", Status::Active, 0)];

    let events = calendar_day(&records, day("2024-03-05"));

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, EventKind::Received);
    assert_eq!(events[1].kind, EventKind::Reminder);
    assert!(events[0].label().starts_with("[received] Acme"));
    assert!(events[1].label().starts_with("[reminder] Acme"));
}

#[test]
fn received_and_reminder_events_land_on_their_own_days() {
    let records = vec![request("Acme", "door", "2024-03-05", Status::Active, 7)];

    let received = calendar_day(&records, day("2024-03-05"));
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].kind, EventKind::Received);

    let reminder = calendar_day(&records, day("2024-03-12"));
    assert_eq!(reminder.len(), 1);
    assert_eq!(reminder[0].kind, EventKind::Reminder);

    assert!(calendar_day(&records, day("2024-03-08")).is_empty());
}

#[test]
fn month_grid_is_monday_first_with_leading_blanks() {
    let records = vec![request("Acme", "door", "2024-03-05", Status::Active, 0)];
    let today = day("2024-03-15");

    let grid = calendar_month(&records, 2024, 3, today).unwrap();

    // 2024-03-01 is a Friday; four blank cells precede it.
    assert_eq!(grid.leading_blanks, 4);
    assert_eq!(grid.days.len(), 31);
    assert!(grid.days[14].is_today);
    assert_eq!(grid.days[4].events.len(), 2);

    assert!(calendar_month(&records, 2024, 13, today).is_none());
}

#[test]
fn stat_counts_bucket_unrecognized_labels_as_other() {
    let records = vec![
        request("A", "a", "2024-03-01", Status::Active, 0),
        request("B", "b", "2024-03-01", Status::Pending, 0),
        request("C", "c", "2024-03-01", Status::Future, 0),
        request("D", "d", "2024-03-01", Status::Done, 0),
        request("E", "e", "2024-03-01", Status::from("urgent".to_string()), 0),
        request("F", "f", "2024-03-01", Status::from(String::new()), 0),
    ];

    let counts = stat_counts(&records);

    assert_eq!(counts.total, 6);
    assert_eq!(counts.active, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.future, 1);
    assert_eq!(counts.other, 2);
}
