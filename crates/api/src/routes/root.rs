use litterless_config::config;
use rocket::serde::json::Json;
use serde::Serialize;

/// # Generic Service Configuration
#[derive(Serialize, Debug)]
pub struct Feature {
    /// Whether the service is enabled
    pub enabled: bool,
}

/// # Server Configuration
#[derive(Serialize, Debug)]
pub struct ApiInfo {
    /// Version of the API
    pub version: String,
    /// URL pointing to the client serving this node
    pub app: String,
    /// Whether transactional email is configured
    pub mail: Feature,
    /// Whether address geocoding is configured
    pub geocoding: Feature,
    /// Whether the partner organization bypass is configured
    pub partner: Feature,
}

/// # Query Node
///
/// Fetch the server configuration for this node.
#[get("/")]
pub async fn root() -> Json<ApiInfo> {
    let config = config().await;

    Json(ApiInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app: config.hosts.app,
        mail: Feature {
            enabled: !config.api.mail.endpoint.is_empty(),
        },
        geocoding: Feature {
            enabled: !config.api.geocoding.endpoint.is_empty(),
        },
        partner: Feature {
            enabled: !config.api.partner.function_endpoint.is_empty(),
        },
    })
}
