//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use geotrack_app::ports::LocationRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the tracker API under `/api/tracker` next to `/health`.
/// Every route answers permissive CORS, and a [`TraceLayer`] logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/tracker", crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "Tracker backend is running" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use geotrack_app::services::ingest_service::IngestService;
    use geotrack_app::services::query_service::QueryService;
    use geotrack_domain::error::TrackerError;
    use geotrack_domain::location::LocationReport;
    use geotrack_domain::stats::DeviceStats;
    use geotrack_domain::time::now;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Stub repository: accepts every report, knows exactly one stored
    /// report per requested IMEI except `000`, which has none.
    #[derive(Clone, Copy, Default)]
    struct StubRepo {
        fail: bool,
    }

    impl StubRepo {
        fn check(self) -> Result<(), TrackerError> {
            if self.fail {
                return Err(TrackerError::Storage(Box::new(std::io::Error::other(
                    "connection refused",
                ))));
            }
            Ok(())
        }
    }

    fn stored(imei: &str) -> Option<LocationReport> {
        (imei != "000").then(|| {
            LocationReport::from_fix(format!("{imei}&1&2&3").parse().unwrap(), now())
        })
    }

    impl LocationRepository for StubRepo {
        fn record(
            &self,
            report: LocationReport,
        ) -> impl Future<Output = Result<LocationReport, TrackerError>> + Send {
            let result = self.check().map(|()| report);
            async { result }
        }

        fn find_recent(
            &self,
            imei: Option<&str>,
            limit: usize,
        ) -> impl Future<Output = Result<Vec<LocationReport>, TrackerError>> + Send {
            let result = self.check().map(|()| {
                stored(imei.unwrap_or("867"))
                    .into_iter()
                    .take(limit)
                    .collect()
            });
            async { result }
        }

        fn find_latest(
            &self,
            imei: &str,
        ) -> impl Future<Output = Result<Option<LocationReport>, TrackerError>> + Send {
            let result = self.check().map(|()| stored(imei));
            async { result }
        }

        fn stats(
            &self,
            imei: &str,
        ) -> impl Future<Output = Result<DeviceStats, TrackerError>> + Send {
            let result = self.check().map(|()| match stored(imei) {
                Some(report) => DeviceStats::new(imei, 1, Some(report.clone()), Some(report)),
                None => DeviceStats::empty(imei),
            });
            async { result }
        }
    }

    fn app_with(repo: StubRepo) -> Router {
        build(AppState::new(IngestService::new(repo), QueryService::new(repo)))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let resp = app.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "application/json",
            "every response is a JSON body"
        );
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post(content_type: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/api/tracker/location");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body.to_owned())).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(&app, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn should_ingest_plain_text_body() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(&app, post(Some("text/plain"), "867&1.5&20&3.5")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Location data received successfully");
        assert_eq!(body["data"]["imei"], "867");
        assert_eq!(body["data"]["longitude"], 1.5);
    }

    #[tokio::test]
    async fn should_ingest_body_without_content_type() {
        let app = app_with(StubRepo::default());

        let (status, _) = send(&app, post(None, "867&1&2&3")).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_ingest_json_data_field() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(
            &app,
            post(Some("application/json"), r#"{"data":"867&1&2&3"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["latitude"], 3.0);
    }

    #[tokio::test]
    async fn should_reject_short_payload_with_received_echo() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(&app, post(Some("text/plain"), "  123&45.6 \n")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Invalid data format. Expected: IMEI&longitude&height&latitude"
        );
        assert_eq!(body["received"], "123&45.6");
    }

    #[tokio::test]
    async fn should_reject_non_numeric_longitude() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(&app, post(None, "123&abc&10&20")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid coordinates");
    }

    #[tokio::test]
    async fn should_return_500_with_message_when_store_fails() {
        let app = app_with(StubRepo { fail: true });

        let (status, body) = send(&app, post(None, "867&1&2&3")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error processing location data");
        assert_eq!(body["error"], "storage error: connection refused");
    }

    #[tokio::test]
    async fn should_list_with_count() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(&app, get("/api/tracker/locations?imei=a")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["imei"], "a");
    }

    #[tokio::test]
    async fn should_reject_unparseable_limit() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(&app, get("/api/tracker/locations?limit=ten")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["received"], "ten");
    }

    #[tokio::test]
    async fn should_answer_undecodable_query_with_json_envelope() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(&app, get("/api/tracker/locations?limit=1&limit=2")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid request parameters");
        assert_eq!(body["received"], "limit=1&limit=2");
    }

    #[tokio::test]
    async fn should_answer_undecodable_path_with_json_envelope() {
        let app = app_with(StubRepo::default());

        for uri in ["/api/tracker/latest/%FF", "/api/tracker/stats/%FF"] {
            let (status, body) = send(&app, get(uri)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "Invalid request parameters");
        }
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_latest() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(&app, get("/api/tracker/latest/000")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn should_return_zeroed_stats_for_unknown_device() {
        let app = app_with(StubRepo::default());

        let (status, body) = send(&app, get("/api/tracker/stats/000")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalLocations"], 0);
        assert!(body["data"]["latestLocation"].is_null());
    }

    #[tokio::test]
    async fn should_answer_cors_preflight() {
        let app = app_with(StubRepo::default());

        let resp = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/tracker/location")
                    .header("origin", "http://example.com")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()
                .contains_key("access-control-allow-origin")
        );
    }
}
