//! Defines the HTTP routes for creating and reading profiles.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_profile, get_profile, get_vcard};
use crate::api::AppState;

pub const PATH_CREATE_PROFILE: &str = "/create-profile";
pub const PATH_GET_PROFILE: &str = "/profile/{profile_id}";
pub const PATH_GET_VCARD: &str = "/profile/{profile_id}/vcard";

pub fn profile_router() -> Router<AppState> {
    Router::new()
        .route(PATH_CREATE_PROFILE, post(create_profile))
        .route(PATH_GET_PROFILE, get(get_profile))
        .route(PATH_GET_VCARD, get(get_vcard))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use adapters::InMemoryStore;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::{app, AppState};
    use crate::services::ProfileService;

    fn test_app() -> axum::Router {
        app(AppState {
            profiles: ProfileService::new(Arc::new(InMemoryStore::new())),
        })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    async fn create(app: &axum::Router, body: Value) -> String {
        let response = app
            .clone()
            .oneshot(post_json("/api/create-profile", &body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await["profile_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn create_then_get_returns_submitted_profile() {
        let app = test_app();
        let fields = json!([
            {"type": "website", "value": "https://jane.example"},
            {"type": "phone", "value": "555-1234"},
            {"type": "phone", "value": "555-9999"}
        ]);
        let id = create(&app, json!({"name": "Jane Doe", "fields": fields})).await;

        let response = app.oneshot(get(&format!("/api/profile/{id}"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": id, "name": "Jane Doe", "fields": fields})
        );
    }

    #[tokio::test]
    async fn unknown_profile_is_404_for_both_reads() {
        let app = test_app();

        for uri in ["/api/profile/nonexistent-id", "/api/profile/nonexistent-id/vcard"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            assert_eq!(body_json(response).await, json!({"detail": "Profile not found"}));
        }
    }

    #[tokio::test]
    async fn vcard_download_has_headers_and_exact_body() {
        let app = test_app();
        let id = create(
            &app,
            json!({"name": "Jane Doe", "fields": [
                {"type": "phone", "value": "555-1234"},
                {"type": "email", "value": "a@b.com"}
            ]}),
        )
        .await;

        let response = app
            .oneshot(get(&format!("/api/profile/{id}/vcard")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/vcard"));
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=Jane Doe.vcf"
        );
        assert_eq!(
            body_text(response).await,
            "BEGIN:VCARD\nVERSION:3.0\nN:Doe;Jane\nFN:Jane Doe\nTEL;TYPE=CELL:555-1234\nEMAIL:a@b.com\nEND:VCARD"
        );
    }

    #[tokio::test]
    async fn malformed_bodies_are_rejected_with_detail() {
        let app = test_app();

        let missing_value = json!({"name": "x", "fields": [{"type": "phone"}]}).to_string();
        let wrong_type = json!({"name": 7, "fields": []}).to_string();
        for body in [missing_value.as_str(), wrong_type.as_str(), "{not json"] {
            let response = app
                .clone()
                .oneshot(post_json("/api/create-profile", body))
                .await
                .unwrap();
            assert!(response.status().is_client_error());
            assert!(body_json(response).await["detail"].is_string());
        }
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = test_app();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/create-profile")
            .header(header::ORIGIN, "http://elsewhere.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
