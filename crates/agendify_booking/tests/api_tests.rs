use agendify_booking::{BookingApiClient, BookingApiError};
use agendify_common::{AppointmentStatus, HttpStatusCode, ScheduleStore};
use agendify_config::BookingApiConfig;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> BookingApiClient {
    BookingApiClient::new(&BookingApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .expect("client should build")
}

fn service_list() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Corte de Cabelo",
            "description": "Corte masculino",
            "price": 50.0,
            "duration": 30,
            "startTime": "09:00",
            "endTime": "17:00",
            "interval": 30,
            "daysOfWeek": ["monday", "wednesday", "friday"]
        },
        {
            "id": "abc-2",
            "name": "Manicure",
            "duration": 45,
            "startTime": "10:00",
            "endTime": "18:00",
            "interval": 15,
            "workDays": [2, 4]
        }
    ])
}

#[tokio::test]
async fn test_get_services_forwards_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(service_list()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let data = client.get_services(Some("secret-token")).await.unwrap();
    assert_eq!(data.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_query_string_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/schedules"))
        .and(query_param("serviceId", "1"))
        .and(query_param("date", "2025-05-05"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let query = vec![
        ("serviceId".to_string(), "1".to_string()),
        ("date".to_string(), "2025-05-05".to_string()),
    ];
    let data = client.get_schedules(&query, None).await.unwrap();
    assert_eq!(data, json!([]));
}

#[tokio::test]
async fn test_error_message_prefers_remote_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/services/9"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "error": "Forbidden resource" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/appointments/3/cancel"))
        .respond_with(ResponseTemplate::new(500).set_body_string(""))
        .mount(&server)
        .await;

    let client = create_client(&server);

    let err = client.delete_service("9", Some("t")).await.unwrap_err();
    match &err {
        BookingApiError::ApiError {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, 403);
            assert_eq!(message, "Forbidden resource");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.status_code(), 502);

    let err = client.cancel_appointment("3", Some("t")).await.unwrap_err();
    assert_eq!(err.client_message(), "Cancel appointment failed");
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/services/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let data = client.delete_service("1", Some("t")).await.unwrap();
    assert!(data.is_null());
}

#[tokio::test]
async fn test_store_finds_service_by_numeric_or_text_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": service_list() })),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);

    let haircut = client.fetch_service("1", None).await.unwrap();
    assert_eq!(haircut.name, "Corte de Cabelo");
    assert_eq!(haircut.days_of_week.len(), 3);

    let manicure = client.fetch_service("abc-2", None).await.unwrap();
    assert_eq!(manicure.interval, 15);
    assert_eq!(manicure.days_of_week.len(), 2);

    let missing = client.fetch_service("99", None).await.unwrap_err();
    assert_eq!(missing.status_code(), 404);
}

#[tokio::test]
async fn test_store_fetches_schedules_for_one_day() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public/services/1/schedules"))
        .and(query_param("date", "2025-05-05"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "serviceId": 1, "date": "2025-05-05T00:00:00.000Z", "startTime": "09:00",
              "appointments": [{ "id": 7, "status": "CONFIRMED" }] },
            { "id": 2, "serviceId": 1, "date": "2025-05-06", "startTime": "10:00",
              "appointments": [{ "id": 8, "status": "CONFIRMED" }] },
            { "id": 3, "serviceId": 1, "startTime": "11:00", "appointments": [] }
        ])))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
    let records = client.fetch_schedules("1", date, None).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].start_time, "09:00");
    assert_eq!(records[0].appointments[0].status, AppointmentStatus::Confirmed);
    assert_eq!(records[1].start_time, "11:00");
}

#[tokio::test]
async fn test_store_surfaces_remote_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public/services/1/schedules"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "message": "Service Unavailable" })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
    let err = client.fetch_schedules("1", date, None).await.unwrap_err();

    assert_eq!(err.status_code(), 502);
    assert_eq!(err.client_message(), "Service Unavailable");
}
