#[cfg(test)]
pub mod test_utils {
    use crate::config::HostConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum_test::TestServer;
    use std::path::PathBuf;
    use tracing::Level;
    use tracing::subscriber::DefaultGuard;
    use tracing_subscriber::FmtSubscriber;

    /// Minimal frontend bundle checked in for the static file tests
    pub fn fixture_static_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/static")
    }

    /// Host configuration with the CLI defaults and the fixture bundle
    pub fn test_config() -> HostConfig {
        HostConfig {
            bind_address: "127.0.0.1:3000".to_string(),
            static_dir: fixture_static_dir(),
            api_base_url: "http://localhost:8000".to_string(),
            locale: "pt-BR".to_string(),
            currency: "BRL".to_string(),
            history_days: 30,
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Test server plus the tracing subscriber that stays installed while it lives
    pub struct TestApp {
        pub server: TestServer,
        _tracing: DefaultGuard,
    }

    /// Create the axum app for testing with the given configuration
    pub fn setup_test_app_with(config: HostConfig) -> TestApp {
        let tracing = init_test_tracing();
        let router = create_router(AppState::new(config.client_settings()), &config.static_dir);
        TestApp {
            server: TestServer::new(router).unwrap(),
            _tracing: tracing,
        }
    }

    pub fn setup_test_app() -> TestApp {
        setup_test_app_with(test_config())
    }
}
