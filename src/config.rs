//! Where the dashboard looks for its data.

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const ALL_IPOS_PATH: &str = "/api/all-ipos/";

/// Query parameter that overrides the base URL at page load.
pub const BASE_URL_PARAM: &str = "api_base";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub base_url: String,
    pub path: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("IPO_API_BASE")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            path: ALL_IPOS_PATH.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        if !base_url.trim().is_empty() {
            self.base_url = base_url.trim().to_string();
        }
        self
    }

    /// Full URL of the "all IPOs" resource.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    /// Reads `?api_base=` from the current page, falling back to defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Self {
        let search = leptos::window().location().search().unwrap_or_default();
        Self::from_query(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_location() -> Self {
        Self::default()
    }

    /// Same as [`from_location`](Self::from_location) but from a raw query
    /// string such as `?api_base=https%3A%2F%2Fipo.example`.
    pub fn from_query(search: &str) -> Self {
        let config = Self::default();
        match query_param(search, BASE_URL_PARAM) {
            Some(base) => config.with_base_url(base),
            None => config,
        }
    }
}

fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| {
            urlencoding::decode(&value.replace('+', " "))
                .ok()
                .map(|decoded| decoded.into_owned())
        })
}
