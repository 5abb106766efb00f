//! End-to-end tests for the discharge type API over the in-memory store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use hospital_backend::Trace;
use hospital_backend::domain::{DischargeType, DischargeTypeService, TRACE_ID_HEADER};
use hospital_backend::inbound::http::configure_api;
use hospital_backend::inbound::http::discharge_types_dto::DischargeTypeMapper;
use hospital_backend::inbound::http::state::HttpState;
use hospital_backend::outbound::memory::InMemoryDischargeTypeRepository;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn seeded_state() -> web::Data<HttpState> {
    let repository = InMemoryDischargeTypeRepository::with_discharge_types([
        DischargeType::try_from_strings("A", "Discharged home").expect("valid"),
        DischargeType::try_from_strings("T", "Transferred").expect("valid"),
    ]);
    web::Data::new(HttpState::new(
        Arc::new(DischargeTypeService::new(Arc::new(repository))),
        DischargeTypeMapper::new(),
    ))
}

macro_rules! init_app {
    ($state:expr) => {
        actix_test::init_service(
            App::new()
                .app_data($state)
                .wrap(Trace)
                .configure(configure_api),
        )
        .await
    };
}

async fn json_body(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}

#[rstest]
#[actix_web::test]
async fn crud_lifecycle(seeded_state: web::Data<HttpState>) {
    let app = init_app!(seeded_state);

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/dischargetypes")
            .set_json(json!({ "code": "ZZ", "description": "aDescription" }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let updated = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/dischargetypes")
            .set_json(json!({ "code": "ZZ", "description": "Updated" }))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(
        json_body(updated).await,
        json!({ "code": "ZZ", "description": "Updated" })
    );

    let listed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/dischargetypes").to_request(),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(
        json_body(listed).await,
        json!([
            { "code": "A", "description": "Discharged home" },
            { "code": "T", "description": "Transferred" },
            { "code": "ZZ", "description": "Updated" },
        ])
    );

    let deleted = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/dischargetypes/ZZ").to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(json_body(deleted).await, json!(true));

    let deleted_again = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/dischargetypes/ZZ").to_request(),
    )
    .await;
    assert_eq!(deleted_again.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn duplicate_create_is_conflict_with_trace_id(seeded_state: web::Data<HttpState>) {
    let app = init_app!(seeded_state);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/dischargetypes")
            .set_json(json!({ "code": "A", "description": "Again" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body = json_body(response).await;
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["traceId"], header.as_str());
    assert_eq!(body["details"]["code"], "duplicate_code");
}

#[rstest]
#[actix_web::test]
async fn update_of_unknown_code_is_not_found(seeded_state: web::Data<HttpState>) {
    let app = init_app!(seeded_state);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/dischargetypes")
            .set_json(json!({ "code": "QQ", "description": "Nope" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn malformed_body_is_invalid_request(seeded_state: web::Data<HttpState>) {
    let app = init_app!(seeded_state);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/dischargetypes")
            .insert_header(("content-type", "application/json"))
            .set_payload("not json")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_json");
}

#[rstest]
#[case(actix_test::TestRequest::get(), "/dischargetypes", StatusCode::OK)]
#[case(actix_test::TestRequest::delete(), "/dischargetypes/T", StatusCode::OK)]
#[case(actix_test::TestRequest::get(), "/api/v1/dischargetypes", StatusCode::NOT_FOUND)]
#[case(actix_test::TestRequest::delete(), "/api/v1/dischargetypes/T", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn routes_are_served_from_the_root(
    seeded_state: web::Data<HttpState>,
    #[case] request: actix_test::TestRequest,
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let app = init_app!(seeded_state);

    let response = actix_test::call_service(&app, request.uri(uri).to_request()).await;

    assert_eq!(response.status(), expected);
}

#[rstest]
#[case(actix_test::TestRequest::post(), "NEW", StatusCode::CREATED)]
#[case(actix_test::TestRequest::put(), "T", StatusCode::OK)]
#[actix_web::test]
async fn body_routes_are_served_from_the_root(
    seeded_state: web::Data<HttpState>,
    #[case] request: actix_test::TestRequest,
    #[case] code: &str,
    #[case] expected: StatusCode,
) {
    let app = init_app!(seeded_state);

    let response = actix_test::call_service(
        &app,
        request
            .uri("/dischargetypes")
            .set_json(json!({ "code": code, "description": "Routed" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), expected);
}
