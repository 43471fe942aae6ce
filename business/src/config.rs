use std::any::Any;

use dining_states::State;
use log::info;
use serde::Deserialize;

/// Backend location.
///
/// `api_base_url` is the origin of the backend (no trailing `/api`). An empty
/// value means "same origin", which is what the web build uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

/// Raw environment, before defaults are applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Reads `API_BASE_URL`, falling back to [`BusinessConfig::default`].
    pub fn from_env() -> anyhow::Result<Self> {
        let raw: RawConfig = serde_env::from_iter(std::env::vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        match raw.api_base_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided API_BASE_URL: {url}");
                Self::new(url.trim())
            }
            _ => Self::default(),
        }
    }

    /// Joins the base URL with an absolute API path such as `/api/menuitems`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                "http://localhost:8080".to_owned()
            },
        }
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}
