#[cfg(test)]
mod integration_tests {
    use crate::config::HostConfig;
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_with, test_config};
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use serde_json::Value;
    use common::ClientSettings;

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app();

        let response = app.server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_client_settings_defaults() {
        let app = setup_test_app();

        let response = app.server.get("/client-settings.json").await;

        response.assert_status(StatusCode::OK);
        let settings: ClientSettings = response.json();
        assert_eq!(settings, ClientSettings::default());
    }

    #[tokio::test]
    async fn test_client_settings_reflect_configuration() {
        let config = HostConfig {
            api_base_url: "https://finance.example.com/api/".to_string(),
            locale: "en-GB".to_string(),
            currency: "eur".to_string(),
            history_days: 60,
            ..test_config()
        };
        let app = setup_test_app_with(config);

        let settings: ClientSettings = app.server.get("/client-settings.json").await.json();

        assert_eq!(settings.api_base_url, "https://finance.example.com/api");
        assert_eq!(settings.locale, "en-GB");
        assert_eq!(settings.currency_code, "EUR");
        assert_eq!(settings.history_days, 60);
    }

    #[tokio::test]
    async fn test_client_settings_wire_format() {
        let app = setup_test_app();

        let body: Value = app.server.get("/client-settings.json").await.json();

        assert_eq!(body["api_base_url"], "http://localhost:8000");
        assert_eq!(body["locale"], "pt-BR");
        assert_eq!(body["currency_code"], "BRL");
        assert_eq!(body["history_days"], 30);
        assert_eq!(body.as_object().map(|fields| fields.len()), Some(4));
    }

    #[tokio::test]
    async fn test_tracing_is_active_while_serving() {
        let app = setup_test_app();

        assert!(tracing::enabled!(tracing::Level::ERROR));
        app.server.get("/health").await.assert_status(StatusCode::OK);
        assert!(tracing::enabled!(tracing::Level::ERROR));
    }

    #[tokio::test]
    async fn test_serves_index_at_root() {
        let app = setup_test_app();

        let response = app.server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("dashboard-root"));
    }

    #[tokio::test]
    async fn test_serves_static_asset() {
        let app = setup_test_app();

        let response = app.server.get("/app.js").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("finance dashboard bundle"));
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let app = setup_test_app();

        for path in ["/dashboard", "/some/deep/link"] {
            let response = app.server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert!(
                response.text().contains("dashboard-root"),
                "expected index.html for {}",
                path
            );
        }
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = setup_test_app();

        let response = app
            .server
            .get("/client-settings.json")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://localhost:8080"),
            )
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }
}
