use crate::api::models::*;
use crate::catalog;
use axum::extract::{Query, State};
use tracing::{debug, warn};

/// `GET /cafe?city=&count=&search=`
///
/// Responds with the matching café names joined by commas. The city is
/// validated before the count.
pub async fn cafe_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, AppError> {
    let query = CafeQuery::from_pairs(pairs);

    debug!(
        city = ?query.city,
        count = ?query.count,
        search = ?query.search,
        "Cafe lookup"
    );

    let city = query.city.as_deref().unwrap_or_default();
    let cafes = state.catalog.cafes(city).ok_or_else(|| {
        warn!(city, "Unknown city");
        AppError::UnknownCity
    })?;

    let limit = query.limit().inspect_err(|_| {
        warn!(count = ?query.count, "Incorrect count");
    })?;

    let selected = catalog::select(cafes, query.search.as_deref(), limit);

    debug!(city, returned = selected.len(), "Cafe lookup complete");

    Ok(catalog::join_names(&selected))
}

#[cfg(test)]
mod tests {
    use crate::api::{self, AppState};
    use crate::catalog::CityCatalog;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    const COFFEE: &str = "%D0%BA%D0%BE%D1%84%D0%B5";
    const COFFEE_UPPER: &str = "%D0%9A%D0%9E%D0%A4%D0%95";
    const BEANS: &str = "%D1%84%D0%B0%D1%81%D0%BE%D0%BB%D1%8C";
    const FORK: &str = "%D0%B2%D0%B8%D0%BB%D0%BA%D0%B0";
    const SPOON: &str = "%D0%BB%D0%BE%D0%B6%D0%BA%D0%B0";

    fn app() -> Router {
        api::router(AppState {
            catalog: Arc::new(CityCatalog::seed()),
        })
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn moscow_total() -> usize {
        CityCatalog::seed().cafes("moscow").unwrap().len()
    }

    #[tokio::test]
    async fn rejects_unknown_or_missing_city_and_bad_count() {
        let cases = [
            ("/cafe", "unknown city"),
            ("/cafe?city=omsk", "unknown city"),
            ("/cafe?city=", "unknown city"),
            ("/cafe?city=Moscow", "unknown city"),
            ("/cafe?city=tula&count=na", "incorrect count"),
            ("/cafe?city=tula&count=-1", "incorrect count"),
        ];

        for (uri, message) in cases {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, message, "{uri}");
        }
    }

    #[tokio::test]
    async fn city_is_checked_before_count() {
        let (status, body) = get("/cafe?city=omsk&count=na").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "unknown city");
    }

    #[tokio::test]
    async fn valid_requests_succeed() {
        let uris = [
            "/cafe?count=2&city=moscow".to_string(),
            "/cafe?city=tula".to_string(),
            format!("/cafe?city=moscow&search={SPOON}"),
        ];

        for uri in uris {
            let (status, _) = get(&uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn returns_whole_city_in_catalog_order() {
        let (status, body) = get("/cafe?city=tula").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Самовар,Тульский пряник,Оружейная");
    }

    #[tokio::test]
    async fn responds_with_plain_text() {
        let request = Request::builder()
            .uri("/cafe?city=tula")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }

    #[tokio::test]
    async fn count_truncates_and_clamps() {
        let total = moscow_total();
        for (count, want) in [(1, 1), (2, 2), (100, total)] {
            let (status, body) = get(&format!("/cafe?city=moscow&count={count}")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.split(',').count(), want, "count={count}");
        }
    }

    #[tokio::test]
    async fn count_keeps_head_of_list() {
        let (_, body) = get("/cafe?city=moscow&count=2").await;
        assert_eq!(body, "Мир кофе,Сладкоежка");
    }

    #[tokio::test]
    async fn zero_count_is_empty_success() {
        let (status, body) = get("/cafe?city=moscow&count=0").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn search_matches_name_substring_ignoring_case() {
        for (term, want) in [(COFFEE, 2), (COFFEE_UPPER, 2), (FORK, 1)] {
            let (status, body) = get(&format!("/cafe?city=moscow&search={term}")).await;
            assert_eq!(status, StatusCode::OK);

            let names: Vec<_> = body.split(',').collect();
            assert_eq!(names.len(), want, "search={term}");
        }

        let (_, body) = get(&format!("/cafe?city=moscow&search={COFFEE}")).await;
        for name in body.split(',') {
            assert!(name.to_lowercase().contains("кофе"), "{name}");
        }
    }

    #[tokio::test]
    async fn search_without_match_is_empty_success() {
        let (status, body) = get(&format!("/cafe?city=moscow&search={BEANS}")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn empty_search_does_not_filter() {
        let (_, body) = get("/cafe?city=moscow&search=").await;
        assert_eq!(body.split(',').count(), moscow_total());
    }

    #[tokio::test]
    async fn search_applies_before_count() {
        let (_, body) = get(&format!("/cafe?city=moscow&search={COFFEE}&count=1")).await;
        assert_eq!(body, "Мир кофе");
    }

    #[tokio::test]
    async fn repeated_requests_are_identical() {
        let uri = format!("/cafe?city=moscow&search={COFFEE}&count=5");
        let first = get(&uri).await;
        let second = get(&uri).await;
        assert_eq!(first, second);
    }
}
