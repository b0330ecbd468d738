//! Vet directory endpoints.
//!
//! ```text
//! GET /vets?specialty=radiology
//! GET /vets?specialty=none
//! GET /vets/3
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, NavigationDecision, VETS_PATH, Vet, VetId, VetSearchParams};
use crate::inbound::http::{ApiResult, FirstValueQuery};
use crate::inbound::http::owners::see_detail;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::VetListingView;

/// Query string of `GET /vets`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct VetListQuery {
    /// Case-insensitive prefix of the last name.
    pub last_name: Option<String>,
    /// Specialty name, or `none` for vets without any specialty.
    pub specialty: Option<String>,
    /// One-based page number; invalid values mean page 1.
    pub page: Option<String>,
}

impl From<VetListQuery> for VetSearchParams {
    fn from(query: VetListQuery) -> Self {
        Self {
            last_name: query.last_name,
            specialty: query.specialty,
            page: query.page,
        }
    }
}

/// Search vets by specialty and last name.
#[utoipa::path(
    get,
    path = "/vets",
    params(VetListQuery),
    responses(
        (status = 200, description = "Vet listing", body = VetListingView),
        (status = 302, description = "Single match", headers(("Location" = String, description = "Vet detail path"))),
        (status = 400, description = "Query string is not form encoded", body = Error),
        (status = 503, description = "Directory unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["vets"],
    operation_id = "listVets"
)]
#[get("/vets")]
pub async fn list_vets(
    state: web::Data<HttpState>,
    query: FirstValueQuery<VetListQuery>,
) -> ApiResult<HttpResponse> {
    let params = VetSearchParams::from(query.into_inner());
    let listing = state.vets.list_vets(&params).await?;
    let options = listing.specialty_options();
    let response = match listing.decision {
        NavigationDecision::Redirect { entity_id } => see_detail(VETS_PATH, entity_id),
        NavigationDecision::ShowListing(page) => {
            HttpResponse::Ok().json(VetListingView::listing(&params, options, page))
        }
    };
    Ok(response)
}

/// Fetch one vet.
#[utoipa::path(
    get,
    path = "/vets/{id}",
    params(("id" = u32, Path, description = "Vet identifier")),
    responses(
        (status = 200, description = "Vet", body = Vet),
        (status = 400, description = "Identifier is not a number", body = Error),
        (status = 404, description = "Unknown vet", body = Error),
        (status = 503, description = "Directory unavailable", body = Error)
    ),
    tags = ["vets"],
    operation_id = "getVet"
)]
#[get("/vets/{id}")]
pub async fn get_vet(state: web::Data<HttpState>, id: web::Path<u32>) -> ApiResult<web::Json<Vet>> {
    let id = VetId::new(id.into_inner());
    state
        .vets
        .vet(id)
        .await?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(format!("vet {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::path_config;
    use crate::inbound::http::test_utils::seeded_state;
    use actix_web::{App, http::StatusCode, http::header, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    async fn get(uri: &str) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .app_data(path_config())
                .service(list_vets)
                .service(get_vet),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
    }

    async fn listed_last_names(uri: &str) -> Vec<String> {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("JSON body");
        value["vets"]
            .as_array()
            .expect("vets array")
            .iter()
            .filter_map(|vet| vet["lastName"].as_str().map(str::to_owned))
            .collect()
    }

    #[rstest]
    #[case("/vets?specialty=radiology", &["Leary", "Stevens"])]
    #[case("/vets?specialty=RADIOLOGY", &["Leary", "Stevens"])]
    #[case("/vets?specialty=none", &["Carter", "Jenkins"])]
    #[case("/vets?specialty=None", &["Carter", "Jenkins"])]
    #[case("/vets?specialty=cardiology", &[])]
    #[case("/vets", &["Carter", "Douglas", "Jenkins", "Leary", "Ortega"])]
    #[case("/vets?specialty=none&specialty=radiology", &["Carter", "Jenkins"])]
    #[actix_web::test]
    async fn specialty_filter_selects_vets(#[case] uri: &str, #[case] expected: &[&str]) {
        assert_eq!(listed_last_names(uri).await, expected);
    }

    #[rstest]
    #[case("/vets?specialty=dentistry", "/vets/3")]
    #[case("/vets?lastName=ort", "/vets/4")]
    #[case("/vets?specialty=radiology&lastName=St", "/vets/5")]
    #[actix_web::test]
    async fn single_vet_redirects(#[case] uri: &str, #[case] location: &str) {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        let header = response.headers().get(header::LOCATION).and_then(|value| value.to_str().ok());
        assert_eq!(header, Some(location));
    }

    #[rstest]
    #[actix_web::test]
    async fn listing_offers_specialty_options_and_keeps_filters_in_links() {
        let response = get("/vets?specialty=none").await;
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("JSON body");
        let labels: Vec<&str> = value["specialties"]
            .as_array()
            .expect("options")
            .iter()
            .filter_map(|option| option["label"].as_str())
            .collect();
        assert_eq!(labels, ["all", "dentistry", "radiology", "surgery", "none"]);
        assert_eq!(value["filters"]["specialty"], "none");
        assert_eq!(value["links"]["first"], "/vets?specialty=none&page=1");
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_specialty_is_not_found() {
        let response = get("/vets?specialty=cardiology").await;
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("JSON body");
        assert_eq!(value["notFound"], true);
        assert_eq!(value["fieldErrors"][0]["field"], "specialty");
    }

    #[rstest]
    #[case("/vets/3", StatusCode::OK)]
    #[case("/vets/42", StatusCode::NOT_FOUND)]
    #[case("/vets/three", StatusCode::BAD_REQUEST)]
    #[actix_web::test]
    async fn detail_view_status(#[case] uri: &str, #[case] expected: StatusCode) {
        assert_eq!(get(uri).await.status(), expected);
    }
}
