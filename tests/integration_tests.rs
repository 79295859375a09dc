use chrono::NaiveDate;
use httpmock::prelude::*;
use picker::core::clock::run_clock;
use picker::core::render::to_text;
use picker::{FixedClock, HttpShipmentSource, Picker, PickerError, Rejection, SourceSettings};
use std::time::Duration;

fn settings(endpoint: String) -> SourceSettings {
    SourceSettings {
        endpoint,
        timeout_seconds: 5,
    }
}

fn wednesday() -> FixedClock {
    FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap())
}

fn shipment_body() -> serde_json::Value {
    serde_json::json!([
        {
            "kunde": {"name": "Muster GmbH"},
            "gesamtgewicht": 120,
            "Waren": [
                {"lagerort": "B-02", "mark": "M-8", "type": "Zarge", "richtung": "R",
                 "breite": 80, "höhe": 200, "gewicht": 12.5, "menge": 1, "wandstärke": 100},
                {"lagerort": "A-01", "mark": "M-7", "type": "Tür", "richtung": "L",
                 "breite": 90, "höhe": 210, "gewicht": 30, "menge": 2, "wandstärke": null}
            ]
        },
        {
            "kunde": {"name": "Holzbau Meier"},
            "gesamtgewicht": 80.5,
            "Waren": [
                {"lagerort": "C-03", "mark": "M-1", "type": "Tür", "richtung": "L",
                 "breite": 80, "höhe": 200, "gewicht": 25, "menge": 1},
                {"lagerort": "C-04", "mark": "M-2", "type": "Tür", "richtung": "R",
                 "breite": 90, "höhe": 200, "gewicht": 28, "menge": 3}
            ]
        }
    ])
}

#[tokio::test]
async fn test_end_to_end_submit_with_real_http() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/paletten");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(shipment_body());
    });

    let source = HttpShipmentSource::new(&settings(server.url("/paletten"))).unwrap();
    let mut picker = Picker::new(source, wednesday());
    let submission = picker.submit(Some("2024-06-13")).await.unwrap();

    api_mock.assert();
    assert_eq!(
        submission.delivery_date,
        NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()
    );

    let unsorted = to_text(&submission.views.unsorted);
    assert_eq!(
        unsorted,
        "Pallet #1 - Kunde: Muster GmbH - Gesamtgewicht: 120 kg\n\
         \x20 1. Lagerort: B-02 | Mark: M-8 | Typ: Zarge\n\
         \x20    Richtung: R | Maße: 80 x 200 | Wandstärke: 100 | Menge: 1\n\
         \x20 2. Lagerort: A-01 | Mark: M-7 | Typ: Tür\n\
         \x20    Richtung: L | Maße: 90 x 210 | Menge: 2\n\
         Pallet #2 - Kunde: Holzbau Meier - Gesamtgewicht: 80.5 kg\n\
         \x20 1. Lagerort: C-03 | Mark: M-1 | Typ: Tür\n\
         \x20    Richtung: L | Maße: 80 x 200 | Menge: 1\n\
         \x20 2. Lagerort: C-04 | Mark: M-2 | Typ: Tür\n\
         \x20    Richtung: R | Maße: 90 x 200 | Menge: 3\n"
    );

    let sorted = &submission.views.sorted;
    assert_eq!(sorted[0].header, submission.views.unsorted[0].header);
    assert!(sorted[0].items[0].summary.ends_with("Mark: M-7 | Typ: Tür"));
    assert!(sorted[0].items[1].summary.ends_with("Mark: M-8 | Typ: Zarge"));
    // equal heights: wider door first
    assert!(sorted[1].items[0].summary.contains("Mark: M-2"));
    assert!(sorted[1].items[1].summary.contains("Mark: M-1"));
}

#[tokio::test]
async fn test_rejected_date_never_calls_api() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/paletten");
        then.status(200).json_body(shipment_body());
    });

    let source = HttpShipmentSource::new(&settings(server.url("/paletten"))).unwrap();
    let mut picker = Picker::new(source, wednesday());

    let err = picker.submit(Some("2024-06-14")).await.unwrap_err();
    assert!(matches!(err, PickerError::Rejected(Rejection::TooFar)));

    let err = picker.submit(None).await.unwrap_err();
    assert!(matches!(err, PickerError::Rejected(Rejection::Missing)));

    api_mock.assert_hits(0);
    assert!(picker.snapshot().is_none());
}

#[tokio::test]
async fn test_api_failure_reports_status() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/failed");
        then.status(500);
    });

    let source = HttpShipmentSource::new(&settings(server.url("/failed"))).unwrap();
    let mut picker = Picker::new(source, wednesday());
    let err = picker.submit(Some("2024-06-13")).await.unwrap_err();

    api_mock.assert_hits(1);
    match &err {
        PickerError::HttpStatusError { status } => assert_eq!(*status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.user_friendly_message().contains("500"));
    assert!(picker.snapshot().is_none());
}

#[tokio::test]
async fn test_missing_waren_fails_loudly() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/paletten");
        then.status(200)
            .json_body(serde_json::json!([{"kunde": {"name": "X"}, "gesamtgewicht": 1}]));
    });

    let source = HttpShipmentSource::new(&settings(server.url("/paletten"))).unwrap();
    let mut picker = Picker::new(source, wednesday());
    let err = picker.submit(Some("2024-06-13")).await.unwrap_err();

    api_mock.assert();
    match err {
        PickerError::MalformedResponse { message } => assert!(message.contains("Waren")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(picker.views().is_none());
}

#[tokio::test]
async fn test_fractional_dimension_is_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/paletten");
        then.status(200).json_body(serde_json::json!([{
            "kunde": {"name": "X"},
            "gesamtgewicht": 10,
            "Waren": [{"lagerort": "A", "mark": "M", "type": "Tür", "richtung": "L",
                       "breite": 80.0, "höhe": 200, "gewicht": 10, "menge": 1}]
        }]));
    });

    let source = HttpShipmentSource::new(&settings(server.url("/paletten"))).unwrap();
    let mut picker = Picker::new(source, wednesday());
    let err = picker.submit(Some("2024-06-13")).await.unwrap_err();

    match err {
        PickerError::MalformedResponse { message } => assert!(message.contains("expected u32")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_frame_without_wall_thickness_is_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/paletten");
        then.status(200).json_body(serde_json::json!([{
            "kunde": {"name": "X"},
            "gesamtgewicht": 10,
            "Waren": [{"lagerort": "A", "mark": "M", "type": "Zarge", "richtung": "L",
                       "breite": 80, "höhe": 200, "gewicht": 10, "menge": 1}]
        }]));
    });

    let source = HttpShipmentSource::new(&settings(server.url("/paletten"))).unwrap();
    let mut picker = Picker::new(source, wednesday());
    let err = picker.submit(Some("2024-06-13")).await.unwrap_err();

    match err {
        PickerError::MalformedResponse { message } => assert!(message.contains("wandstärke")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/paletten");
        then.status(200).body("<html>Wartung</html>");
    });

    let source = HttpShipmentSource::new(&settings(server.url("/paletten"))).unwrap();
    let mut picker = Picker::new(source, wednesday());
    let err = picker.submit(Some("2024-06-13")).await.unwrap_err();

    assert!(matches!(err, PickerError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_api_error() {
    // Port 9 (discard) is not served by anything in the test environment.
    let source = HttpShipmentSource::new(&settings("http://127.0.0.1:9/paletten".to_string()))
        .unwrap();
    let mut picker = Picker::new(source, wednesday());
    let err = picker.submit(Some("2024-06-13")).await.unwrap_err();

    assert!(matches!(err, PickerError::ApiError(_)));
}

#[tokio::test]
async fn test_friday_submission_targets_monday() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/paletten");
        then.status(200).json_body(serde_json::json!([]));
    });

    let source = HttpShipmentSource::new(&settings(server.url("/paletten"))).unwrap();
    let friday = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
    let mut picker = Picker::new(source, friday);

    let err = picker.submit(Some("2024-06-15")).await.unwrap_err();
    assert!(matches!(err, PickerError::Rejected(Rejection::WrongDay)));

    let submission = picker.submit(Some("2024-06-17")).await.unwrap();
    assert!(submission.views.unsorted.is_empty());
    assert!(submission.views.sorted.is_empty());
}

#[tokio::test]
async fn test_clock_keeps_ticking_during_slow_fetch() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .delay(Duration::from_millis(1500))
            .json_body(shipment_body());
    });

    let source = HttpShipmentSource::new(&settings(server.url("/slow"))).unwrap();
    let mut picker = Picker::new(source, wednesday());
    let clock = wednesday();
    let mut ticks = 0;

    let (submission, ()) = tokio::join!(
        picker.submit(Some("2024-06-13")),
        run_clock(&clock, Some(2), |_| ticks += 1)
    );

    assert!(submission.is_ok());
    assert_eq!(ticks, 2);
}
