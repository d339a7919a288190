//! Custom Axum extractors
//!
//! None of them let axum's plain-text rejections reach the client.

use std::convert::Infallible;

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams};

/// JSON request body; any extraction failure is a 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Integer id from the path. A non-integer segment does not name any
/// resource, so it is a 404 rather than a 400.
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::not_found(e.body_text()))?;

        let id = id
            .parse::<i32>()
            .map_err(|_| ApiError::not_found(format!("'{}' is not an integer id", id)))?;

        Ok(Self(id))
    }
}

/// `?page=` query parameter. A query string that does not decode (a
/// repeated `page`, say) is treated like a missing one: first page.
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let page = match Query::<PaginationParams>::from_request_parts(parts, state).await {
            Ok(Query(params)) => Pagination::from(params),
            Err(rejection) => {
                tracing::debug!("ignoring page query: {}", rejection.body_text());
                Pagination::default()
            }
        };
        Ok(Self(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde_json::Value;

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn json_body_parses() {
        let JsonBody(value): JsonBody<Value> =
            JsonBody::from_request(json_request(r#"{"a": 1}"#), &())
                .await
                .unwrap();
        assert_eq!(value["a"], 1);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let err = JsonBody::<Value>::from_request(json_request("{not json"), &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    async fn page_of(uri: &str) -> i64 {
        let (mut parts, _) = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
            .into_parts();
        let PageQuery(page) = PageQuery::from_request_parts(&mut parts, &()).await.unwrap();
        page.page
    }

    #[tokio::test]
    async fn page_query_reads_page() {
        assert_eq!(page_of("/questions").await, 1);
        assert_eq!(page_of("/questions?page=3").await, 3);
        assert_eq!(page_of("/questions?page=abc").await, 1);
    }

    #[tokio::test]
    async fn repeated_page_falls_back_to_first() {
        assert_eq!(page_of("/questions?page=1&page=2").await, 1);
    }

    #[tokio::test]
    async fn missing_content_type_is_400() {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from("{}"))
            .unwrap();
        let err = JsonBody::<Value>::from_request(req, &()).await.err().unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
