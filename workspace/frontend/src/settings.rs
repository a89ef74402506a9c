use common::{ClientSettings, DisplayLocale};
use log::Level;
use web_sys::window;

/// Path the dashboard host serves runtime settings on
const CLIENT_SETTINGS_PATH: &str = "/client-settings.json";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Finance API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Finance API port (e.g., 8000)
    pub api_port: u16,

    /// API path prefix, empty when the API is mounted at the root
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Full base URL handed out by the host; wins over host/port/path
    pub api_base_override: Option<String>,

    /// Default log level for the application
    pub log_level: Level,

    /// Language tag used for dates and month headings (e.g., "pt-BR")
    pub locale: String,

    /// ISO 4217 currency code for amounts
    pub currency_code: String,

    /// Trailing window of the balance chart, in days
    pub history_days: u32,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            api_host: "localhost".to_string(),
            api_port: 8000,
            api_path: String::new(),
            api_use_https: false,
            api_base_override: None,
            log_level: Level::Info,
            locale: client.locale,
            currency_code: client.currency_code,
            history_days: client.history_days,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }
        }

        settings.apply_storage();
        settings
    }

    /// Overlay values saved in localStorage
    fn apply_storage(&mut self) {
        let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let read = |key: &str| storage.get_item(key).ok().flatten();

        if let Some(api_host) = read("dashboard_api_host") {
            self.api_host = api_host;
            self.api_base_override = None;
        }

        if let Some(port_val) = read("dashboard_api_port").and_then(|p| p.parse::<u16>().ok()) {
            self.api_port = port_val;
            self.api_base_override = None;
        }

        if let Some(api_path) = read("dashboard_api_path") {
            self.api_path = api_path;
        }

        if let Some(use_https) = read("dashboard_api_use_https") {
            self.api_use_https = use_https.to_lowercase() == "true";
        }

        if let Some(log_level) = read("dashboard_log_level") {
            self.log_level = match log_level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => self.log_level,
            };
        }

        if let Some(locale) = read("dashboard_locale") {
            self.locale = locale;
        }

        if let Some(currency_code) = read("dashboard_currency") {
            self.currency_code = currency_code;
        }

        if let Some(days) = read("dashboard_history_days").and_then(|d| d.parse::<u32>().ok()) {
            self.history_days = days;
        }
    }

    /// Take over the values served by the dashboard host
    pub fn apply_client_settings(&mut self, client: ClientSettings) {
        self.api_base_override = Some(client.api_base_url.trim_end_matches('/').to_string());
        self.locale = client.locale;
        self.currency_code = client.currency_code;
        self.history_days = client.history_days;
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        if let Some(base) = &self.api_base_override {
            return base.clone();
        }
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }

    /// Locale and currency used for rendering
    pub fn display_locale(&self) -> DisplayLocale {
        DisplayLocale::from_tag(&self.locale).with_currency(&self.currency_code)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

/// Fetch the host's runtime settings and apply them under any localStorage
/// overrides. Missing or broken settings leave the defaults in place.
pub async fn load_client_settings() {
    let response = match gloo_net::http::Request::get(CLIENT_SETTINGS_PATH).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            log::warn!("No client settings from host (HTTP {}), using defaults", response.status());
            return;
        }
        Err(e) => {
            log::warn!("Client settings request failed: {}", e);
            return;
        }
    };

    match response.json::<ClientSettings>().await {
        Ok(client) => {
            log::debug!("Client settings from host: {:?}", client);
            update_settings(|settings| {
                settings.apply_client_settings(client);
                settings.apply_storage();
            });
        }
        Err(e) => log::warn!("Failed to parse client settings: {}", e),
    }
}
