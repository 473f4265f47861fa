use chrono::{NaiveDate, TimeZone, Utc};
use reqboard_core::{Request, RequestDraft, Status, ValidationError};

#[test]
fn create_trims_fields_and_stamps_both_timestamps() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
    let draft = RequestDraft {
        received_date: " 2024-03-05 ".to_string(),
        client_name: "  Acme Carpentry  ".to_string(),
        summary: "  replace workshop door  ".to_string(),
        status: Status::Pending,
        reminder_days: Some(7),
    };

    let request = Request::create(&draft, now).unwrap();

    assert!(!request.id.as_str().is_empty());
    assert_eq!(
        request.received_date,
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    );
    assert_eq!(request.client_name, "Acme Carpentry");
    assert_eq!(request.summary, "replace workshop door");
    assert_eq!(request.status, Status::Pending);
    assert_eq!(request.reminder_days, 7);
    assert_eq!(request.created_at, now);
    assert_eq!(request.updated_at, now);
}

#[test]
fn create_rejects_blank_client_name() {
    let draft = RequestDraft {
        received_date: "2024-03-05".to_string(),
        client_name: "   ".to_string(),
        ..RequestDraft::default()
    };

    let err = Request::create(&draft, Utc::now()).unwrap_err();
    assert_eq!(err, ValidationError::EmptyClientName);
}

#[test]
fn create_rejects_unparseable_received_date() {
    let draft = RequestDraft {
        received_date: "next tuesday".to_string(),
        client_name: "Acme".to_string(),
        ..RequestDraft::default()
    };

    let err = Request::create(&draft, Utc::now()).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidReceivedDate { value } if value == "next tuesday"));
}

#[test]
fn missing_or_negative_reminder_offset_coerces_to_zero() {
    let now = Utc::now();
    let mut draft = RequestDraft {
        received_date: "2024-03-05".to_string(),
        client_name: "Acme".to_string(),
        ..RequestDraft::default()
    };

    draft.reminder_days = None;
    assert_eq!(Request::create(&draft, now).unwrap().reminder_days, 0);

    draft.reminder_days = Some(-5);
    assert_eq!(Request::create(&draft, now).unwrap().reminder_days, 0);
}

#[test]
fn apply_edit_keeps_id_and_created_at_and_refreshes_updated_at() {
    let created = Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap();
    let edited = Utc.with_ymd_and_hms(2024, 3, 6, 18, 0, 0).unwrap();
    let draft = RequestDraft {
        received_date: "2024-03-05".to_string(),
        client_name: "Acme".to_string(),
        summary: "initial".to_string(),
        ..RequestDraft::default()
    };
    let original = Request::create(&draft, created).unwrap();

    let update = RequestDraft {
        received_date: "2024-03-06".to_string(),
        client_name: "Acme Nord".to_string(),
        summary: "rescoped".to_string(),
        status: Status::Custom("urgent".to_string()),
        reminder_days: Some(2),
    };
    let updated = original.apply_edit(&update, edited).unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, created);
    assert_eq!(updated.updated_at, edited);
    assert_eq!(updated.client_name, "Acme Nord");
    assert_eq!(updated.status, Status::Custom("urgent".to_string()));
    assert_eq!(updated.reminder_days, 2);
}

#[test]
fn apply_edit_applies_same_validation_as_create() {
    let now = Utc::now();
    let draft = RequestDraft {
        received_date: "2024-03-05".to_string(),
        client_name: "Acme".to_string(),
        ..RequestDraft::default()
    };
    let original = Request::create(&draft, now).unwrap();

    let bad = RequestDraft {
        received_date: "05/03/2024".to_string(),
        client_name: "Acme".to_string(),
        ..RequestDraft::default()
    };
    let err = original.apply_edit(&bad, now).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidReceivedDate { .. }));
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
    let draft = RequestDraft {
        received_date: "2024-03-05".to_string(),
        client_name: "Acme".to_string(),
        summary: "door".to_string(),
        status: Status::Active,
        reminder_days: Some(7),
    };
    let request = Request::create(&draft, now).unwrap();

    let json = serde_json::to_value(&request).unwrap();
    let object = json.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "clientName",
            "createdAt",
            "id",
            "receivedDate",
            "reminderDays",
            "status",
            "summary",
            "updatedAt",
        ]
    );
    assert_eq!(json["receivedDate"], "2024-03-05");
    assert_eq!(json["clientName"], "Acme");
    assert_eq!(json["status"], "active");
    assert_eq!(json["reminderDays"], 7);

    let decoded: Request = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn unknown_status_labels_round_trip_verbatim() {
    let now = Utc::now();
    let draft = RequestDraft {
        received_date: "2024-03-05".to_string(),
        client_name: "Acme".to_string(),
        status: Status::from("Waiting On Parts".to_string()),
        ..RequestDraft::default()
    };
    let request = Request::create(&draft, now).unwrap();

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["status"], "Waiting On Parts");

    let decoded: Request = serde_json::from_value(json).unwrap();
    assert_eq!(
        decoded.status,
        Status::Custom("Waiting On Parts".to_string())
    );
}
