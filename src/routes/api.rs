//! Front-end configuration endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::{APP_NAME, APP_VERSION};

/// Public configuration handed to the front-end. Never carries secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    pub version: String,
    pub name: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            version: APP_VERSION.to_string(),
            name: APP_NAME.to_string(),
        }
    }
}

/// `GET /api/config`
pub async fn get_config() -> Json<FrontendConfig> {
    Json(FrontendConfig::default())
}
