//! Behaviour tests for the listing endpoints as seen by an HTTP client.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use actix_web::http::header;
use actix_web::{App, test as actix_test, web};
use clinic_directory::Trace;
use clinic_directory::domain::TRACE_ID_HEADER;
use clinic_directory::inbound::http::owners::{get_owner, list_owners};
use clinic_directory::inbound::http::path_config;
use clinic_directory::inbound::http::state::HttpState;
use clinic_directory::inbound::http::vets::{get_vet, list_vets};
use clinic_directory::outbound::memory::InMemoryDirectory;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::Value;

/// The parts of a response the scenarios inspect.
#[derive(Clone, Debug)]
struct Snapshot {
    status: u16,
    location: Option<String>,
    trace_id: Option<String>,
    body: Value,
}

#[derive(Default, ScenarioState)]
struct HttpWorld {
    directory: Slot<InMemoryDirectory>,
    response: Slot<Snapshot>,
}

impl HttpWorld {
    fn response(&self) -> Snapshot {
        self.response.get().expect("a request should have been made")
    }
}

fn header_text(response: &actix_web::dev::ServiceResponse, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

#[fixture]
fn world() -> HttpWorld {
    HttpWorld::default()
}

#[given("the directory server")]
fn the_directory_server(world: &HttpWorld) {
    world
        .directory
        .set(InMemoryDirectory::seeded().expect("seed data is valid"));
}

#[when("GET {uri} is requested")]
fn get_is_requested(world: &HttpWorld, uri: String) {
    let directory = world.directory.get().expect("server should be configured");
    let snapshot = actix_rt::System::new().block_on(async move {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::from_directory(directory)))
                .app_data(path_config())
                .wrap(Trace)
                .service(list_owners)
                .service(get_owner)
                .service(list_vets)
                .service(get_vet),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(&uri).to_request())
                .await;
        let status = response.status().as_u16();
        let location = header_text(&response, header::LOCATION.as_str());
        let trace_id = header_text(&response, TRACE_ID_HEADER);
        let bytes = actix_test::read_body(response).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        Snapshot {
            status,
            location,
            trace_id,
            body,
        }
    });
    world.response.set(snapshot);
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &HttpWorld, status: u16) {
    assert_eq!(world.response().status, status);
}

#[then("the response redirects to {location}")]
fn the_response_redirects_to(world: &HttpWorld, location: String) {
    assert_eq!(world.response().location, Some(location));
}

#[then("the next page link is {href}")]
fn the_next_page_link_is(world: &HttpWorld, href: String) {
    assert_eq!(world.response().body["links"]["next"], Value::String(href));
}

#[then("the form reports {field} as {code}")]
fn the_form_reports(world: &HttpWorld, field: String, code: String) {
    let body = world.response().body;
    let errors = body["fieldErrors"].as_array().expect("field errors");
    assert!(
        errors
            .iter()
            .any(|error| error["field"] == field.as_str() && error["code"] == code.as_str()),
        "no {code} error on {field}: {errors:?}"
    );
}

#[then("the listing shows page {page} of {pages}")]
fn the_listing_shows_page_of(world: &HttpWorld, page: u32, pages: u64) {
    let body = world.response().body;
    assert_eq!(body["currentPage"], page);
    assert_eq!(body["totalPages"], pages);
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &HttpWorld, code: String) {
    assert_eq!(world.response().body["code"], Value::String(code));
}

#[then("the response has no pager links")]
fn the_response_has_no_pager_links(world: &HttpWorld) {
    assert!(world.response().body.get("links").is_none());
}

#[then("the response carries a trace identifier")]
fn the_response_carries_a_trace_identifier(world: &HttpWorld) {
    let trace_id = world.response().trace_id.expect("trace-id header");
    assert!(uuid::Uuid::parse_str(&trace_id).is_ok());
}

#[scenario(
    path = "tests/features/http_navigation.feature",
    name = "A single owner match answers with a redirect"
)]
fn a_single_owner_match_answers_with_a_redirect(world: HttpWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/http_navigation.feature",
    name = "Several matches answer with a listing page"
)]
fn several_matches_answer_with_a_listing_page(world: HttpWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/http_navigation.feature",
    name = "Invalid criteria keep the search page displayed"
)]
fn invalid_criteria_keep_the_search_page_displayed(world: HttpWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/http_navigation.feature",
    name = "Every response carries a trace identifier"
)]
fn every_response_carries_a_trace_identifier(world: HttpWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/http_navigation.feature",
    name = "A redirect target is a live detail view"
)]
fn a_redirect_target_is_a_live_detail_view(world: HttpWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/http_navigation.feature",
    name = "An unknown detail view is not found"
)]
fn an_unknown_detail_view_is_not_found(world: HttpWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/http_navigation.feature",
    name = "A repeated page parameter still lists"
)]
fn a_repeated_page_parameter_still_lists(world: HttpWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/http_navigation.feature",
    name = "A malformed detail identifier is a bad request"
)]
fn a_malformed_detail_identifier_is_a_bad_request(world: HttpWorld) {
    let _ = world;
}
