//! Request extractors that report failures as domain errors.
//!
//! Listing query strings are read leniently: when a parameter repeats, its
//! first value is used, so a pasted or doubled link still lists. Path
//! segments that do not parse become a JSON `400` carrying the trace id.

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::PathError, web};
use futures_util::future::{Ready, ready};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::Error;

/// Query string extractor where the first occurrence of a parameter wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstValueQuery<T>(pub T);

impl<T> FirstValueQuery<T> {
    /// Unwrap into the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> FirstValueQuery<T> {
    /// Parse `query_string`, keeping the first value of each parameter.
    ///
    /// # Errors
    /// Returns [`Error::invalid_request`] when the query string is not valid
    /// form encoding or the values do not fit `T`.
    pub fn from_query(query_string: &str) -> Result<Self, Error> {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string)
            .map_err(|err| Error::invalid_request(err.to_string()))?
            .into_inner();
        let mut fields = Map::new();
        for (name, value) in pairs {
            fields.entry(name).or_insert(Value::String(value));
        }
        serde_json::from_value(Value::Object(fields))
            .map(Self)
            .map_err(|err| Error::invalid_request(format!("invalid query string: {err}")))
    }
}

impl<T: DeserializeOwned> FromRequest for FirstValueQuery<T> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_query(req.query_string()).map_err(actix_web::Error::from))
    }
}

/// Path extractor configuration mapping parse failures to
/// [`Error::invalid_request`].
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, req: &HttpRequest| {
        Error::invalid_request(format!("invalid path {}: {err}", req.path())).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, TRACE_ID_HEADER};
    use crate::middleware::Trace;
    use actix_web::{App, HttpResponse, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    #[serde(rename_all = "camelCase")]
    struct Listing {
        last_name: Option<String>,
        page: Option<String>,
    }

    #[rstest]
    #[case("lastName=Davis&page=2&page=3", Some("Davis"), Some("2"))]
    #[case("lastName=Davis&lastName=Black", Some("Davis"), None)]
    #[case("page=&page=4", None, Some(""))]
    #[case("lastName=Sun+Prairie&unknown=1", Some("Sun Prairie"), None)]
    #[case("", None, None)]
    fn first_value_of_each_parameter_wins(
        #[case] query: &str,
        #[case] last_name: Option<&str>,
        #[case] page: Option<&str>,
    ) {
        let FirstValueQuery(listing) =
            FirstValueQuery::<Listing>::from_query(query).expect("lenient query");
        assert_eq!(
            listing,
            Listing {
                last_name: last_name.map(str::to_owned),
                page: page.map(str::to_owned),
            }
        );
    }

    #[rstest]
    fn ill_typed_values_are_invalid_requests() {
        let err = FirstValueQuery::<HashMap<String, u32>>::from_query("page=two")
            .expect_err("not a number");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[actix_web::test]
    async fn malformed_path_segment_is_a_json_bad_request() {
        let app = actix_test::init_service(
            App::new().app_data(path_config()).wrap(Trace).route(
                "/owners/{id}",
                web::get().to(|id: web::Path<u32>| async move {
                    HttpResponse::Ok().body(id.into_inner().to_string())
                }),
            ),
        )
        .await;
        let request = actix_test::TestRequest::get().uri("/owners/abc").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
        let body: Error = actix_test::read_body_json(response).await;
        assert_eq!(body.code(), ErrorCode::InvalidRequest);
        assert!(body.trace_id().is_some());
    }
}
